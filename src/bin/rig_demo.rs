//! Headless camera rig demo
//!
//! Drives a scripted tank through a small obstacle course and ticks the
//! camera rig after each movement update (the required post-movement
//! ordering), printing the camera pose and any diagnostic events. Run with
//! `RUST_LOG=debug` for the rig's internal logging.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use tank_rig_engine::camera::{CameraConfig, CameraRig, PoseProvider};
use tank_rig_engine::game::{MatchTimer, StatDatabase};
use tank_rig_engine::physics::{LayerMask, Obstacle, StaticWorld};
use tank_rig_engine::tank::TankController;
use tank_rig_engine::weather::WeatherManager;

const DT: f32 = 1.0 / 60.0;
const SIMULATION_SECONDS: f32 = 12.0;

fn build_arena() -> StaticWorld {
    let mut world = StaticWorld::with_ground(0.0);
    // A wall the camera has to pull in front of while the tank drives past
    world.add_obstacle(Obstacle::new(
        Vec3::new(-6.0, 0.0, -30.0),
        Vec3::new(6.0, 12.0, -26.0),
        LayerMask::TERRAIN,
    ));
    // A rock next to the track
    world.add_obstacle(Obstacle::from_center(
        Vec3::new(8.0, 1.5, 10.0),
        Vec3::new(2.0, 1.5, 2.0),
        LayerMask::STRUCTURES,
    ));
    world
}

fn stat_roster() -> StatDatabase {
    StatDatabase::from_json(
        r#"{
            "hulls": [
                {"name": "LightHull", "hit_points": 800.0, "power": 450.0,
                 "mass": 18.0, "max_speed": 16.0, "turn_speed": 90.0,
                 "mud_traversal": 70.0}
            ],
            "guns": [
                {"name": "Rapid76", "caliber": 76.0, "damage": 120.0,
                 "reload": 4.5}
            ]
        }"#,
    )
    .expect("embedded roster is valid JSON")
}

fn main() {
    env_logger::init();

    let world = build_arena();
    stat_roster().log_roster();

    let tank = Rc::new(RefCell::new(TankController::new(Vec3::new(
        0.0, 0.0, -40.0,
    ))));
    let provider: Rc<RefCell<dyn PoseProvider>> = tank.clone();

    let mut rig = CameraRig::new(CameraConfig::default());
    rig.set_target(Rc::downgrade(&provider));

    let mut weather = WeatherManager::new();
    let mut timer = MatchTimer::default();

    let ticks = (SIMULATION_SECONDS / DT) as usize;
    for frame in 0..ticks {
        let elapsed = frame as f32 * DT;

        // Scripted drive: straight run, then a sweeping right turn
        let turn_axis = if elapsed > 6.0 { 0.6 } else { 0.0 };
        {
            let mut tank = tank.borrow_mut();
            tank.drive(1.0, turn_axis, DT);
            tank.follow_ground(&world);
            tank.aim(0.3, 0.0, DT);
        }

        // Camera strictly after the tank's movement update
        rig.tick(DT, &world);

        weather.tick(DT);
        for event in timer.tick(DT) {
            println!("timer event: {event:?}");
        }

        // Cycle through every camera mode during the run
        if frame == ticks / 4 || frame == ticks / 2 || frame == 3 * ticks / 4 {
            rig.switch_mode();
        }

        for event in rig.take_events() {
            println!("camera event: {event:?}");
        }

        if frame % 60 == 0 {
            let tank_pos = tank.borrow().position;
            println!(
                "t={:5.1}s mode={:?} tank=({:6.2}, {:5.2}, {:6.2}) camera=({:6.2}, {:5.2}, {:6.2}) wind={:.2}",
                elapsed,
                rig.mode(),
                tank_pos.x,
                tank_pos.y,
                tank_pos.z,
                rig.position().x,
                rig.position().y,
                rig.position().z,
                weather.wind_speed(),
            );
        }
    }
}
