pub mod entity_map;
