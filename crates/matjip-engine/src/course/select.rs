use matjip_core::Restaurant;

use super::tables::CategoryBucket;

/// Pool size handed to the generator.
pub const CANDIDATE_CAPACITY: usize = 40;

/// Category-balanced subset of an already score-sorted pool.
///
/// Quotas (rounded up, capped by bucket size): meal 50%, cafe 30%, bar 15%,
/// other fills what remains. Buckets keep pool order and are concatenated
/// meal, cafe, bar, other. If the quotas leave room, the rest is filled from
/// unselected records in pool order, so the result holds
/// `min(capacity, pool size)` records.
#[must_use]
pub fn select_diverse_subset<'a, I>(pool: I, capacity: usize) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let pool: Vec<&'a Restaurant> = pool.into_iter().collect();

    let mut meal = Vec::new();
    let mut cafe = Vec::new();
    let mut bar = Vec::new();
    let mut other = Vec::new();
    for (idx, r) in pool.iter().enumerate() {
        match CategoryBucket::of(r) {
            CategoryBucket::Meal => meal.push(idx),
            CategoryBucket::Cafe => cafe.push(idx),
            CategoryBucket::Bar => bar.push(idx),
            CategoryBucket::Other => other.push(idx),
        }
    }

    let meal_take = meal.len().min(capacity.div_ceil(2));
    let cafe_take = cafe.len().min((capacity * 3).div_ceil(10));
    let bar_take = bar.len().min((capacity * 15).div_ceil(100));
    let other_take = other
        .len()
        .min(capacity.saturating_sub(meal_take + cafe_take + bar_take));

    let mut picked = vec![false; pool.len()];
    let mut order: Vec<usize> = Vec::with_capacity(capacity.min(pool.len()));
    for idx in meal[..meal_take]
        .iter()
        .chain(&cafe[..cafe_take])
        .chain(&bar[..bar_take])
        .chain(&other[..other_take])
    {
        picked[*idx] = true;
        order.push(*idx);
    }

    for (idx, taken) in picked.iter().enumerate() {
        if order.len() >= capacity {
            break;
        }
        if !taken {
            order.push(idx);
        }
    }
    order.truncate(capacity);

    order.into_iter().map(|idx| pool[idx]).collect()
}
