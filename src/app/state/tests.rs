use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::AppState;
use crate::{
    app::{effect::Lifecycle, events::AppEvent},
    config::EffectConfig,
    ui::capability::{ColorCapability, SurfaceSupport},
};

fn app(support: SurfaceSupport) -> (AppState, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel(16);
    let config = EffectConfig {
        seed: Some(5),
        ..EffectConfig::default()
    };
    (AppState::new(config, support, tx), rx)
}

#[tokio::test(start_paused = true)]
async fn mount_then_frames_flow_through_the_channel() {
    let (mut app, mut rx) = app(SurfaceSupport::Supported(ColorCapability::TrueColor));
    app.mount(100, 30, None).expect("mount");
    assert!(app.effect.is_running());
    assert_eq!(
        app.effect.surface().map(|surface| surface.grid_size()),
        Some((100, 60))
    );

    for _ in 0..3 {
        let event = rx.recv().await.expect("frame event");
        app.handle_event(event).expect("handle");
    }
    assert_eq!(app.frames_drawn, 3);
    assert_eq!(app.last_report.map(|report| report.frame), Some(3));
}

#[tokio::test(start_paused = true)]
async fn quit_key_unmounts_and_stops() {
    let (mut app, _rx) = app(SurfaceSupport::Supported(ColorCapability::Xterm256));
    app.mount(80, 24, Some((1280, 768))).expect("mount");
    let pending = app.scheduler.pending();
    assert!(pending.is_some());

    app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
    ))))
    .expect("handle");

    assert!(!app.running);
    assert_eq!(app.effect.lifecycle(), Lifecycle::Stopped);
    assert_eq!(app.scheduler.pending(), None);
}

#[tokio::test]
async fn unsupported_terminal_mounts_inert() {
    let (mut app, _rx) = app(SurfaceSupport::Unsupported);
    app.mount(80, 24, None).expect("mount");
    assert_eq!(app.effect.lifecycle(), Lifecycle::Uninitialized);
    assert!(app.effect.surface().is_none());
    assert_eq!(app.scheduler.pending(), None);

    app.handle_event(AppEvent::Quit).expect("handle");
    assert_eq!(app.effect.lifecycle(), Lifecycle::Stopped);
}

#[tokio::test]
async fn resize_is_ignored() {
    let (mut app, _rx) = app(SurfaceSupport::Supported(ColorCapability::TrueColor));
    app.mount(80, 24, None).expect("mount");
    app.handle_event(AppEvent::Input(Event::Resize(120, 40)))
        .expect("handle");
    assert!(app.running);
    assert_eq!(
        app.effect.state().map(|state| state.viewport),
        Some(crate::engine::Viewport::new(640, 384))
    );
}
