use shared::InputEvent;
use winit::{
    dpi::PhysicalPosition,
    event::{
        ElementState, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
    },
};

/// Maps a winit window event onto the viewer's input vocabulary.
pub fn translate(event: &WindowEvent<'_>) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested
        | WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    state: ElementState::Pressed,
                    virtual_keycode: Some(VirtualKeyCode::Escape),
                    ..
                },
            ..
        } => Some(InputEvent::Close),
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
            delta: scroll_delta(delta),
        }),
        WindowEvent::MouseInput { state, button, .. } => button_event(*state, *button),
        WindowEvent::CursorMoved {
            position: PhysicalPosition { x, y },
            ..
        } => Some(InputEvent::CursorMoved {
            position: (*x, *y),
        }),
        _ => None,
    }
}

/// Vertical component of a wheel movement, lines or pixels alike.
pub fn scroll_delta(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y,
    }
}

pub fn button_event(state: ElementState, button: MouseButton) -> Option<InputEvent> {
    match (state, button) {
        (ElementState::Pressed, MouseButton::Left) => Some(InputEvent::PrimaryPressed),
        (ElementState::Released, MouseButton::Left) => Some(InputEvent::PrimaryReleased),
        (ElementState::Pressed, MouseButton::Right) => Some(InputEvent::SecondaryPressed),
        _ => None,
    }
}
