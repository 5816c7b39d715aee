pub mod spatials;
