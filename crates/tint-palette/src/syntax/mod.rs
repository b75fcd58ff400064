//! Syntax roles and the token maps that bind them to palette slots.
//!
//! Token maps are static data. A theme selects exactly one of them; editor
//! targets then translate roles into their own scope identifiers.

mod maps;
mod role;

pub use maps::TokenMapId;
pub use role::SyntaxRole;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tint_common::KeyError;

    #[test]
    fn role_keys_are_unique() {
        let keys: HashSet<_> = SyntaxRole::ALL.iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), SyntaxRole::COUNT);
    }

    #[test]
    fn role_parse_round_trips() {
        for role in SyntaxRole::ALL {
            assert_eq!(role.key().parse::<SyntaxRole>().unwrap(), role);
        }
        assert_eq!(
            "docstring".parse::<SyntaxRole>().unwrap_err(),
            KeyError::UnknownRole("docstring".into())
        );
    }

    #[test]
    fn every_token_map_binds_every_role_once() {
        for map in TokenMapId::ALL {
            let table = map.table();
            assert_eq!(table.len(), SyntaxRole::COUNT, "{map}");
            let roles: HashSet<_> = table.iter().map(|(role, _)| *role).collect();
            assert_eq!(roles.len(), SyntaxRole::COUNT, "{map} has duplicate roles");
            for role in SyntaxRole::ALL {
                assert!(map.slot_for(role).is_some(), "{map} misses {role}");
            }
        }
    }

    #[test]
    fn token_maps_differ() {
        assert_ne!(TokenMapId::Classic.table(), TokenMapId::Muted.table());
        assert_ne!(TokenMapId::Classic.table(), TokenMapId::Vivid.table());
    }

    #[test]
    fn token_map_id_parsing() {
        assert_eq!("Vivid".parse::<TokenMapId>().unwrap(), TokenMapId::Vivid);
        assert_eq!(TokenMapId::default(), TokenMapId::Classic);
        assert!(matches!(
            "neon".parse::<TokenMapId>(),
            Err(KeyError::UnknownTokenMap(_))
        ));
    }

    #[test]
    fn classic_binds_strings_to_cyan() {
        use crate::slots::PaletteSlot;
        assert_eq!(
            TokenMapId::Classic.slot_for(SyntaxRole::String),
            Some(PaletteSlot::Cyan)
        );
        assert_eq!(
            TokenMapId::Muted.slot_for(SyntaxRole::Comment),
            Some(PaletteSlot::TextFaint)
        );
    }
}
