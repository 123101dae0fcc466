//! Daily aging rules.
//!
//! Every rule is a unit step that is skipped when quality already sits at the
//! bound it moves towards. A category's daily update is a fixed sequence of
//! such steps, so an item that starts outside `0..=50` is never pulled back in
//! by a step moving the other way.

use crate::category::Category;
use crate::item::Item;

/// Ceiling for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Floor for every item.
pub const MIN_QUALITY: i32 = 0;

/// Backstage passes gain an extra point at or below this many days.
pub const BACKSTAGE_FIRST_THRESHOLD: i32 = 10;

/// Backstage passes gain a second extra point at or below this many days.
pub const BACKSTAGE_SECOND_THRESHOLD: i32 = 5;

const fn raise(quality: i32) -> i32 {
    if quality < MAX_QUALITY { quality + 1 } else { quality }
}

const fn lower(quality: i32) -> i32 {
    if quality > MIN_QUALITY { quality - 1 } else { quality }
}

const fn is_expired(sell_in: i32) -> bool {
    sell_in <= 0
}

/// Quality after one day of degradation for regular goods.
///
/// `rate` is the number of times each decrement fires: 1 for regular goods,
/// 2 for conjured ones.
fn degrade(quality: i32, sell_in: i32, rate: u32) -> i32 {
    let mut quality = quality;
    for _ in 0..rate {
        quality = lower(quality);
        if is_expired(sell_in) {
            quality = lower(quality);
        }
    }
    quality
}

fn mature(quality: i32) -> i32 {
    raise(quality)
}

fn approach_concert(quality: i32, sell_in: i32) -> i32 {
    if is_expired(sell_in) {
        return MIN_QUALITY;
    }

    let mut quality = raise(quality);
    if sell_in <= BACKSTAGE_FIRST_THRESHOLD {
        quality = raise(quality);
    }
    if sell_in <= BACKSTAGE_SECOND_THRESHOLD {
        quality = raise(quality);
    }
    quality
}

/// Quality an item of `category` has after one day, judged on its state at
/// the start of the day.
#[must_use]
pub fn next_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
    match category {
        Category::Regular => degrade(quality, sell_in, 1),
        Category::Conjured => degrade(quality, sell_in, 2),
        Category::AgedBrie => mature(quality),
        Category::BackstagePasses => approach_concert(quality, sell_in),
        Category::Legendary => quality,
    }
}

/// Age `item` by one day, using an already known `category`.
pub fn age(item: &mut Item, category: Category) {
    if category.is_legendary() {
        return;
    }
    item.quality = next_quality(category, item.sell_in, item.quality);
    item.sell_in = item.sell_in.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stop_at_bounds() {
        assert_eq!(raise(49), 50);
        assert_eq!(raise(50), 50);
        assert_eq!(raise(60), 60);
        assert_eq!(lower(1), 0);
        assert_eq!(lower(0), 0);
        assert_eq!(lower(-3), -3);
    }

    #[test]
    fn test_regular_degradation() {
        assert_eq!(next_quality(Category::Regular, 5, 10), 9);
        assert_eq!(next_quality(Category::Regular, 1, 10), 9);
        assert_eq!(next_quality(Category::Regular, 0, 10), 8);
        assert_eq!(next_quality(Category::Regular, -4, 10), 8);
        assert_eq!(next_quality(Category::Regular, 0, 1), 0);
        assert_eq!(next_quality(Category::Regular, 0, 0), 0);
    }

    #[test]
    fn test_conjured_degradation() {
        assert_eq!(next_quality(Category::Conjured, 1, 5), 3);
        assert_eq!(next_quality(Category::Conjured, 0, 10), 6);
        assert_eq!(next_quality(Category::Conjured, 0, 3), 0);
        assert_eq!(next_quality(Category::Conjured, 4, 1), 0);
    }

    #[test]
    fn test_aged_brie_matures() {
        assert_eq!(next_quality(Category::AgedBrie, 3, 0), 1);
        assert_eq!(next_quality(Category::AgedBrie, -3, 10), 11);
        assert_eq!(next_quality(Category::AgedBrie, 3, 49), 50);
        assert_eq!(next_quality(Category::AgedBrie, 3, 50), 50);
    }

    #[test]
    fn test_backstage_thresholds() {
        assert_eq!(next_quality(Category::BackstagePasses, 11, 20), 21);
        assert_eq!(next_quality(Category::BackstagePasses, 10, 20), 22);
        assert_eq!(next_quality(Category::BackstagePasses, 6, 20), 22);
        assert_eq!(next_quality(Category::BackstagePasses, 5, 20), 23);
        assert_eq!(next_quality(Category::BackstagePasses, 1, 20), 23);
        assert_eq!(next_quality(Category::BackstagePasses, 0, 20), 0);
        assert_eq!(next_quality(Category::BackstagePasses, -1, 20), 0);
    }

    #[test]
    fn test_backstage_caps_each_step() {
        assert_eq!(next_quality(Category::BackstagePasses, 5, 49), 50);
        assert_eq!(next_quality(Category::BackstagePasses, 5, 48), 50);
        assert_eq!(next_quality(Category::BackstagePasses, 10, 49), 50);
        assert_eq!(next_quality(Category::BackstagePasses, 5, 50), 50);
    }

    #[test]
    fn test_out_of_range_quality_is_not_pulled_back() {
        assert_eq!(next_quality(Category::AgedBrie, 3, 55), 55);
        assert_eq!(next_quality(Category::BackstagePasses, 3, 55), 55);
        assert_eq!(next_quality(Category::Regular, 3, -2), -2);
        assert_eq!(next_quality(Category::Regular, 3, 55), 54);
    }

    #[test]
    fn test_age_updates_sell_in() {
        let mut item = Item::new("regular goods", 0, 3);
        age(&mut item, Category::Regular);
        assert_eq!((item.sell_in, item.quality), (-1, 1));

        let mut legendary = Item::new("Sulfuras, Hand of Ragnaros", 0, 80);
        age(&mut legendary, Category::Legendary);
        assert_eq!((legendary.sell_in, legendary.quality), (0, 80));
    }

    #[test]
    fn test_sell_in_saturates() {
        let mut item = Item::new("regular goods", i32::MIN, 0);
        age(&mut item, Category::Regular);
        assert_eq!(item.sell_in, i32::MIN);
    }
}
