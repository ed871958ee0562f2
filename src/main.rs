use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use runner2d::engine::game_loop::GameLoop;
use runner2d::engine::input::InputManager;
use runner2d::engine::physics::body::presets;
use runner2d::{AnimationParams, ControllerConfig, InputRelay, MotionController, PhysicsWorld};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting runner2d demo...");

    // Create event loop and window (used for keyboard focus; no rendering)
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("runner2d")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    // Build the scene: one platform and one character standing on it
    let mut physics = PhysicsWorld::new();
    let platform = physics.add_rigid_body(presets::platform_body(0.0, -0.55));
    physics.add_collider(presets::platform_collider(40.0, 1.0), platform);

    let mut controller = MotionController::spawn(ControllerConfig::default(), &mut physics, 0.0, 1.0)?;

    let mut input = InputManager::new();
    let mut relay = InputRelay::default();
    let mut anim = AnimationParams::new();
    let mut game_loop = GameLoop::new();

    info!("Scene ready, entering main loop");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::AboutToWait => {
                // Frame tick: sample input, then roll the input edges over
                relay.sample(input.state(), &mut anim);
                input.update();

                // Fixed physics ticks
                let steps = game_loop.begin_frame();
                for _ in 0..steps {
                    relay.physics_tick(
                        &mut controller,
                        &mut physics,
                        &mut anim,
                        game_loop.fixed_timestep(),
                    );
                    physics.step();
                }

                // Report position once a second
                if steps > 0 && game_loop.update_count() % 60 < steps as u64 {
                    if let Some((x, y)) = controller.position(&physics) {
                        let (vx, vy) = controller.velocity(&physics);
                        info!(
                            "pos=({x:.2}, {y:.2}) vel=({vx:.2}, {vy:.2}) grounded={} crouching={}",
                            controller.grounded(),
                            controller.crouching()
                        );
                    }
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
