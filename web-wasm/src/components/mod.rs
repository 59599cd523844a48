pub mod header;
pub mod search_bar;
pub mod salary_list;
pub mod detail_panel;
pub mod analysis_output;
