//! End-to-end course planning over the bundled dataset with a scripted generator.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Mutex;

use matjip_core::{load_restaurants, Restaurant, RestaurantDb};
use matjip_engine::course::CANDIDATE_CAPACITY;
use matjip_engine::{
    filter_for_course, generate_course, plan_offline, select_diverse_subset,
    CourseGenerator, CourseParams, Mood, PlanSource, TimeOfDay,
};

struct Scripted {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl Scripted {
    fn ok(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl CourseGenerator for Scripted {
    type Error = String;

    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, String>> + Send {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.reply.clone();
        async move { reply }
    }
}

fn bundled() -> RestaurantDb {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/restaurants.json");
    load_restaurants(&path).expect("bundled dataset loads")
}

fn seongsu_evening() -> CourseParams {
    CourseParams {
        region: "서울 성수/건대".to_string(),
        mood: Mood::Romantic,
        budget: None,
        time: TimeOfDay::Evening,
        extra: None,
    }
}

fn pool_ids(records: &[Restaurant], params: &CourseParams) -> Vec<u64> {
    let filtered = filter_for_course(records, params);
    select_diverse_subset(filtered.iter().map(|c| c.restaurant), CANDIDATE_CAPACITY)
        .iter()
        .map(|r| r.id)
        .collect()
}

#[tokio::test]
async fn generated_picks_are_resolved_and_topped_up() {
    let db = bundled();
    let generator = Scripted::ok(
        "추천 코스입니다!\n```json\n{\"title\": \"성수 로맨틱\", \"spots\": [\
         {\"id\": 3, \"time\": \"18:00\", \"customDescription\": \"파스타\"},\
         {\"id\": 20, \"time\": \"20:00\"},\
         {\"id\": 999, \"time\": \"22:00\"}]}\n```",
    );

    let plan = generate_course(&generator, db.restaurants(), &seongsu_evening()).await;

    assert_eq!(plan.source, PlanSource::Generated);
    assert_eq!(plan.title, "성수 로맨틱");
    assert_eq!(plan.summary, "맞춤 추천 데이트 코스입니다.");
    assert_eq!(plan.spots[0].restaurant.id, 3);
    assert_eq!(plan.spots[0].custom_description.as_deref(), Some("파스타"));
    assert_eq!(plan.spots[1].restaurant.id, 20);
    assert_eq!(plan.spots.len(), 5);
    assert_eq!(plan.spots[2].time.as_deref(), Some("21:00"));
    assert_eq!(plan.matched_from_db, 5);
    assert_eq!(plan.total_spots, 5);
    assert!(plan.total_budget.starts_with('약'));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("[3] 라 트라토리아 한남"));
    assert!(prompts[0].contains("[20] 성수 칵테일 바 르블랑"));
}

#[tokio::test]
async fn unknown_picks_are_replaced_by_pool_head() {
    let db = bundled();
    let params = seongsu_evening();
    let generator = Scripted::ok("{\"spots\": [{\"id\": 4040}, {\"id\": 5050}]}");

    let plan = generate_course(&generator, db.restaurants(), &params).await;

    let expected: Vec<u64> = pool_ids(db.restaurants(), &params).into_iter().take(5).collect();
    let ids: Vec<u64> = plan.spots.iter().map(|s| s.restaurant.id).collect();
    assert_eq!(plan.source, PlanSource::Generated);
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn generator_failure_falls_back() {
    let db = bundled();
    let generator = Scripted::failing("rate limited after retries");

    let plan = generate_course(&generator, db.restaurants(), &seongsu_evening()).await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert_eq!(plan.title, "서울 성수/건대 추천 코스");
    assert_eq!(plan.spots.len(), 3);
    assert_eq!(plan.spots[0].time.as_deref(), Some("18:00"));
    assert_eq!(plan, plan_offline(db.restaurants(), &seongsu_evening()));
}

#[tokio::test]
async fn unparseable_output_falls_back() {
    let db = bundled();
    let generator = Scripted::ok("죄송하지만 지금은 추천할 수 없어요.");

    let plan = generate_course(&generator, db.restaurants(), &seongsu_evening()).await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn empty_dataset_skips_generator() {
    let generator = Scripted::ok("{\"spots\": []}");

    let plan = generate_course(&generator, &[], &seongsu_evening()).await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert!(plan.spots.is_empty());
    assert_eq!(generator.calls(), 0);
}
