pub mod carousel;
pub mod typewriter;
pub mod view_fit;
