//! Date-course planning command.
//!
//! Uses the configured chat-completions model when an API key is present,
//! otherwise (or with `--offline`) builds the deterministic course.

use clap::Args;
use matjip_core::{AppConfig, RestaurantDb};
use matjip_engine::{
    generate_course, plan_offline, Budget, CourseParams, CoursePlan, Mood, TimeOfDay,
};
use matjip_llm::{ChatClient, LlmError};

#[derive(Debug, Args)]
pub(crate) struct CourseArgs {
    /// Region key, e.g. "서울 성수/건대" or "부산 해운대"
    #[arg(long)]
    pub region: String,
    /// romantic, active, chill, foodie, culture or night
    #[arg(long)]
    pub mood: Mood,
    /// low, medium, high or luxury (medium when omitted)
    #[arg(long)]
    pub budget: Option<Budget>,
    /// morning, afternoon, evening or night
    #[arg(long)]
    pub time: TimeOfDay,
    /// Free-text extra request passed to the planner
    #[arg(long)]
    pub extra: Option<String>,
    /// Skip the model and build the deterministic course
    #[arg(long)]
    pub offline: bool,
}

impl CourseArgs {
    pub(crate) fn params(&self) -> CourseParams {
        CourseParams {
            region: self.region.clone(),
            mood: self.mood,
            budget: self.budget,
            time: self.time,
            extra: self.extra.clone(),
        }
    }
}

/// Plan a course and print it as pretty JSON.
///
/// # Errors
///
/// Returns an error if the chat client cannot be built for a reason other
/// than a missing key, or if the plan cannot be serialized. Model failures
/// are not errors: the engine falls back to the deterministic course.
pub(crate) async fn run_course(
    config: &AppConfig,
    db: &RestaurantDb,
    args: &CourseArgs,
) -> anyhow::Result<()> {
    let params = args.params();
    let plan = plan_course(config, db, &params, args.offline).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

async fn plan_course(
    config: &AppConfig,
    db: &RestaurantDb,
    params: &CourseParams,
    offline: bool,
) -> anyhow::Result<CoursePlan> {
    if offline {
        return Ok(plan_offline(db.restaurants(), params));
    }
    match ChatClient::new(&config.llm) {
        Ok(client) => Ok(generate_course(&client, db.restaurants(), params).await),
        Err(LlmError::MissingApiKey) => {
            tracing::warn!("no LLM API key configured; building the offline course");
            Ok(plan_offline(db.restaurants(), params))
        }
        Err(e) => Err(anyhow::anyhow!("failed to build chat client: {e}")),
    }
}
