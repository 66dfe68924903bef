pub mod completions_sea;
