//! Search filter over the collection

use crate::types::Entity;

/// Records whose faction/name/alt mode/weapons text contains `query`,
/// case-insensitively, in source order. Empty query keeps everything.
pub fn visible<'a>(entities: &'a [Entity], query: &str) -> Vec<&'a Entity> {
    let needle = query.to_lowercase();
    entities
        .iter()
        .filter(|entity| search_text(entity).contains(&needle))
        .collect()
}

fn search_text(entity: &Entity) -> String {
    let mut parts = vec![
        entity.faction.as_str(),
        entity.name.as_str(),
        entity.alt_mode.as_str(),
    ];
    parts.extend(entity.weapons.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}
