mod details;
mod fps;
mod list;
mod panels;

pub(super) use fps::FrameCounter;
