use crate::items::{
    Item,
    groups::{ItemGroup, ItemGroups},
};

/// Group items by name, the way a basket does.
pub(crate) fn groups<'a>(items: Vec<Item<'a>>) -> ItemGroups<'a> {
    let mut groups = ItemGroups::default();

    for item in items {
        groups
            .entry(item.name().to_string())
            .or_insert_with(ItemGroup::default)
            .push(item);
    }

    groups
}
