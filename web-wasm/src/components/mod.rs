pub mod export_buttons;
pub mod header;
pub mod idea_list;
pub mod loading;
pub mod niche_analysis;
pub mod niche_list;
pub mod recommendations;
pub mod stats_panel;
pub mod upload_area;
