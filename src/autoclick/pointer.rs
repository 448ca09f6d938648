//! Synthetic pointer input

use std::sync::Mutex;

use crate::error::{ChetError, Result};

/// Screen coordinates in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Something that can report the pointer position and press the left button
pub trait PointerDevice: Send + Sync {
    fn position(&self) -> Result<Point>;

    /// Press and release the left button at the current position
    fn left_click(&self) -> Result<()>;
}

/// Records clicks instead of sending them; used for dry runs and tests
#[derive(Debug, Default)]
pub struct RecordingPointer {
    position: Point,
    clicks: Mutex<Vec<Point>>,
}

impl RecordingPointer {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Point { x, y },
            clicks: Mutex::new(Vec::new()),
        }
    }

    pub fn clicks(&self) -> Vec<Point> {
        self.clicks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn click_count(&self) -> usize {
        self.clicks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl PointerDevice for RecordingPointer {
    fn position(&self) -> Result<Point> {
        Ok(self.position)
    }

    fn left_click(&self) -> Result<()> {
        self.clicks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(self.position);
        Ok(())
    }
}

/// The real mouse, driven through `SendInput`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPointer;

#[cfg(windows)]
impl PointerDevice for SystemPointer {
    fn position(&self) -> Result<Point> {
        use windows::Win32::Foundation::POINT;
        use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }.map_err(|e| ChetError::Pointer(e.to_string()))?;
        Ok(Point {
            x: point.x,
            y: point.y,
        })
    }

    fn left_click(&self) -> Result<()> {
        use windows::Win32::UI::Input::KeyboardAndMouse::{
            SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
            MOUSEINPUT, MOUSE_EVENT_FLAGS,
        };

        let button = |flags: MOUSE_EVENT_FLAGS| INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: 0,
                    dy: 0,
                    mouseData: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        let inputs = [button(MOUSEEVENTF_LEFTDOWN), button(MOUSEEVENTF_LEFTUP)];

        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(ChetError::Pointer(format!(
                "SendInput accepted {} of {} events",
                sent,
                inputs.len()
            )));
        }
        Ok(())
    }
}

#[cfg(not(windows))]
impl PointerDevice for SystemPointer {
    fn position(&self) -> Result<Point> {
        Err(ChetError::Pointer(
            "synthetic pointer input is only available on Windows".to_string(),
        ))
    }

    fn left_click(&self) -> Result<()> {
        Err(ChetError::Pointer(
            "synthetic pointer input is only available on Windows".to_string(),
        ))
    }
}
