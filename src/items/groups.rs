//! Item Groups

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::items::Item;

/// Item groups keyed by item name, in the order each name was first added.
pub type ItemGroups<'a> = IndexMap<String, ItemGroup<'a>, FxBuildHasher>;

/// Item Group
///
/// All the items in a basket sharing one name, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemGroup<'a> {
    items: SmallVec<[Item<'a>; 10]>,
}

impl<'a> ItemGroup<'a> {
    /// Create a new item group with items.
    pub fn new(items: SmallVec<[Item<'a>; 10]>) -> Self {
        ItemGroup { items }
    }

    /// Append an item to the end of the group.
    pub fn push(&mut self, item: Item<'a>) {
        self.items.push(item);
    }

    /// Iterate over the items in the item group.
    pub fn iter(&self) -> impl Iterator<Item = &Item<'a>> {
        self.items.iter()
    }

    /// The first item added to the group.
    pub fn first(&self) -> Option<&Item<'a>> {
        self.items.first()
    }

    /// Get the number of items in the item group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the item group is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> FromIterator<Item<'a>> for ItemGroup<'a> {
    fn from_iter<I: IntoIterator<Item = Item<'a>>>(iter: I) -> Self {
        ItemGroup {
            items: iter.into_iter().collect(),
        }
    }
}
