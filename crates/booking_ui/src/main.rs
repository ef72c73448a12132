mod api;
mod app;
mod charts;
mod components;
mod context;
mod error;
mod forms;
mod pages;
mod rows;
mod sections;

use app::App;
use leptos::mount_to_body;

fn main() {
    mount_to_body(App);
}
