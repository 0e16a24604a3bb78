use proptest::prelude::*;

use design_catalog::GroupOrder;
use design_catalog::catalog::one_per_group;

fn items() -> impl Strategy<Value = Vec<(u8, usize)>> {
    prop::collection::vec(0u8..6, 0..40).prop_map(|groups| {
        groups
            .into_iter()
            .enumerate()
            .map(|(idx, group)| (group, idx))
            .collect()
    })
}

proptest! {
    #[test]
    fn one_entry_per_group_within_cap(
        items in items(),
        cap in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut groups: Vec<u8> = items.iter().map(|(group, _)| *group).collect();
        groups.sort_unstable();
        groups.dedup();

        let picked = one_per_group(items, |(group, _)| *group, cap, GroupOrder::Shuffled { seed: Some(seed) });
        let mut picked_groups: Vec<u8> = picked.iter().map(|(group, _)| *group).collect();
        picked_groups.sort_unstable();
        picked_groups.dedup();

        prop_assert_eq!(picked.len(), groups.len().min(cap));
        prop_assert_eq!(picked_groups.len(), picked.len());
    }

    #[test]
    fn each_pick_is_the_first_of_its_group(items in items(), seed in any::<u64>()) {
        let picked = one_per_group(items.clone(), |(group, _)| *group, usize::MAX, GroupOrder::Shuffled { seed: Some(seed) });
        for (group, idx) in picked {
            let first = items.iter().find(|(g, _)| *g == group).map(|(_, i)| *i);
            prop_assert_eq!(first, Some(idx));
        }
    }

    #[test]
    fn seeded_draws_repeat(items in items(), seed in any::<u64>(), cap in 1usize..8) {
        let order = GroupOrder::Shuffled { seed: Some(seed) };
        let first = one_per_group(items.clone(), |(group, _)| *group, cap, order);
        let second = one_per_group(items, |(group, _)| *group, cap, order);
        prop_assert_eq!(first, second);
    }
}
