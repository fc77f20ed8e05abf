pub mod featured_searches;
pub mod loading_spinner;
