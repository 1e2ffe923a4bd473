pub(crate) use self::glutin_thread::*;
pub use self::glutin_thread::with_2d_graphics;
pub(crate) use self::glutin_thread_event::*;

mod event_conversion;
mod glutin_runtime;
mod glutin_thread;
mod glutin_thread_event;
mod glutin_window;

