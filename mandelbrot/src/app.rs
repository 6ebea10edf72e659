use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use shared::{Controller, Response, ScreenSize};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{
    config::ViewerConfig,
    gpu::{Gpu, Scene},
    input,
};

/// Caps redraws at a fixed rate.
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn new(frames_per_second: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / frames_per_second.max(1),
            next_frame: now,
        }
    }

    /// Whether a frame is due at `now`; schedules the following one if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.interval;
        if self.next_frame < now {
            // Fell behind, don't try to catch up.
            self.next_frame = now + self.interval;
        }
        true
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }
}

/// When the event loop draws a frame.
#[derive(Debug)]
pub enum RedrawPolicy {
    /// Continuous redraws capped by the limiter.
    Paced(FrameLimiter),
    /// Redraws only after something changed.
    OnDemand,
}

impl RedrawPolicy {
    pub fn new(frame_rate: Option<u32>, now: Instant) -> Self {
        match frame_rate {
            Some(fps) => Self::Paced(FrameLimiter::new(fps, now)),
            None => Self::OnDemand,
        }
    }

    /// Whether a change of the picture should request a frame right away.
    /// Paced loops pick the change up on their next frame.
    pub fn redraw_on_change(&self) -> bool {
        matches!(self, Self::OnDemand)
    }

    /// Called once pending events are drained: whether to draw now and how
    /// long the loop may sleep.
    pub fn on_idle(&mut self, now: Instant) -> (bool, ControlFlow) {
        match self {
            Self::Paced(limiter) => {
                let due = limiter.poll(now);
                (due, ControlFlow::WaitUntil(limiter.next_frame()))
            }
            Self::OnDemand => (false, ControlFlow::Wait),
        }
    }
}

pub fn create_window(config: &ViewerConfig, event_loop: &EventLoop<()>) -> Result<Window> {
    WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(event_loop)
        .context("failed to open the window")
}

/// Runs the event loop until the window is closed.
pub fn run<S: Scene + 'static>(
    config: &ViewerConfig,
    event_loop: EventLoop<()>,
    window: Window,
    mut gpu: Gpu,
    mut scene: S,
) -> ! {
    let mut controller = Controller::new(gpu.screen());
    scene.sync(&gpu, controller.viewport());

    let mut redraw = RedrawPolicy::new(config.frame_rate, Instant::now());

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            if let WindowEvent::Resized(size) = event {
                let screen = ScreenSize::new(size.width, size.height);
                if screen.width > 0 && screen.height > 0 {
                    gpu.resize(screen);
                    controller.resize(screen);
                    scene.resize(&gpu, screen);
                    if redraw.redraw_on_change() {
                        window.request_redraw();
                    }
                }
                return;
            }

            let Some(action) = input::translate(event) else {
                return;
            };
            match controller.handle(action) {
                Response::Exit => *control_flow = ControlFlow::Exit,
                Response::ViewportChanged => {
                    tracing::debug!(viewport = ?controller.viewport(), "viewport changed");
                    scene.sync(&gpu, controller.viewport());
                    if redraw.redraw_on_change() {
                        window.request_redraw();
                    }
                }
                Response::Unchanged => {}
            }
        }
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            match gpu.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    tracing::warn!("surface lost, reconfiguring");
                    gpu.reconfigure();
                    window.request_redraw();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    tracing::error!("out of GPU memory");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
                Err(wgpu::SurfaceError::Timeout) => tracing::warn!("surface timed out"),
            }
        }
        Event::MainEventsCleared => {
            if let ControlFlow::ExitWithCode(_) = *control_flow {
                return;
            }
            let (due, flow) = redraw.on_idle(Instant::now());
            if due {
                window.request_redraw();
            }
            *control_flow = flow;
        }
        _ => {}
    })
}
