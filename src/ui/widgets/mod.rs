// SPDX-License-Identifier: MPL-2.0
pub mod gesture_area;
pub mod remote_image;

pub use gesture_area::{gesture_area, GestureArea};
pub use remote_image::{RemoteImage, RemoteImageCache};
