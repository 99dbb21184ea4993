//! Adapters - concrete implementations of application ports

mod wttr_adapter;

pub use wttr_adapter::WttrWeatherAdapter;
