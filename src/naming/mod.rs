pub mod affix;
pub mod path_parts;
