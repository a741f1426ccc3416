use crate::app::App;

mod app;
mod components;
mod storage;

fn main() {
    yew::Renderer::<App>::new().render();
}
