//! Pan/zoom viewer for 2D point and polygon data.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! camera (pan, zoom, auto-fit), the background grid and axes, and drawing of
//! the user's shapes with vertex markers and coordinate labels. The host
//! page constructs a [`web::Viewer`], forwards DOM events and the input text
//! box to it, and shows any thrown [`error::ViewError`] message to the user.
//! Rust hosts can drive [`engine::Engine`] directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`web`] | `#[wasm_bindgen]` exports for the JavaScript host |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Shapes, draw mode, and JSON input normalization |
//! | [`camera`] | Camera, viewport, and the world/screen transform |
//! | [`bounds`] | Bounding box over scene geometry |
//! | [`fit`] | Auto-fit camera computation |
//! | [`grid`] | "Nice" grid step selection and line enumeration |
//! | [`input`] | Pointer/wheel input types and the pan state machine |
//! | [`render`] | `Surface` trait, display list, grid and shape renderers |
//! | [`canvas2d`] | `Surface` backed by a browser 2D context |
//! | [`config`] | Viewer tunables |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric and color constants |

pub mod bounds;
pub mod camera;
pub mod canvas2d;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod fit;
pub mod grid;
pub mod input;
pub mod render;
pub mod scene;
pub mod web;
