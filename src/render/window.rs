//! raylib window: keyboard/mouse input and a primitive-based 3D renderer.
//!
//! Meshes are stand-ins built from raylib primitives. Each draw call's
//! transform is pushed onto the rlgl matrix stack so the primitive is drawn
//! in model space.
use ::raylib::ffi;
use ::raylib::prelude::*;
use bevy_ecs::prelude::*;
use glam::{Mat4, Vec3};
use log::info;

use crate::game::tick_with_input;
use crate::render::{Renderer, render_draw_list};
use crate::resources::drawlist::{DrawCall, DrawList, MeshHandle};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputFrame, InputSource};
use crate::resources::player::PlayerState;

const MOUSE_SENSITIVITY: f32 = 0.1;
const MAX_PITCH: f32 = 85.0;
const THIRD_PERSON_DISTANCE: f32 = 6.0;
const THIRD_PERSON_HEIGHT: f32 = 2.0;
const FOV_Y: f32 = 70.0;

fn v3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// Mouse-look state kept across frames.
#[derive(Debug, Clone, Copy)]
pub struct RaylibInput {
    /// Degrees around +Y, 0 looking down +X.
    yaw: f32,
    pitch: f32,
}

impl Default for RaylibInput {
    /// Starts facing -Z like a fresh [`PlayerState`].
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

impl RaylibInput {
    pub fn look_dir(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
    }

    /// Read the devices for this frame.
    pub fn read(&mut self, rl: &RaylibHandle) -> InputFrame {
        let mouse = rl.get_mouse_delta();
        self.yaw += mouse.x * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - mouse.y * MOUSE_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);

        let axis = |pos: KeyboardKey, neg: KeyboardKey| {
            (rl.is_key_down(pos) as i32 - rl.is_key_down(neg) as i32) as f32
        };
        InputFrame {
            fire: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            sprint: rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
            move_forward: axis(KeyboardKey::KEY_W, KeyboardKey::KEY_S),
            move_right: axis(KeyboardKey::KEY_D, KeyboardKey::KEY_A),
            look_dir: self.look_dir(),
        }
    }
}

/// [`InputSource`] view over the raylib handle for one frame.
pub struct RaylibInputSource<'a> {
    pub look: &'a mut RaylibInput,
    pub rl: &'a RaylibHandle,
}

impl InputSource for RaylibInputSource<'_> {
    fn poll(&mut self, _dt: f32) -> InputFrame {
        self.look.read(self.rl)
    }
}

/// Draws into an open 3D mode scope for the duration of one frame.
pub struct RaylibRenderer<'a, D: RaylibDraw3D> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw3D> RaylibRenderer<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

fn material_color(call: &DrawCall) -> Color {
    if call.material.flashing {
        return Color::RED;
    }
    let base = match call.mesh {
        MeshHandle::Ground => Color::new(60, 56, 52, 255),
        MeshHandle::Cube => Color::new(110, 105, 100, 255),
        MeshHandle::Ball => Color::new(255, 90, 20, 255),
        MeshHandle::Skeleton => Color::new(225, 220, 200, 255),
        MeshHandle::Lantern => Color::new(255, 210, 120, 255),
        MeshHandle::ParticleCube => Color::WHITE,
    };
    let c = call.material.color.clamp(glam::Vec4::ZERO, glam::Vec4::ONE);
    Color::new(
        (base.r as f32 * c.x) as u8,
        (base.g as f32 * c.y) as u8,
        (base.b as f32 * c.z) as u8,
        (base.a as f32 * c.w) as u8,
    )
}

fn with_transform(transform: &Mat4, draw: impl FnOnce()) {
    let m = transform.to_cols_array();
    // SAFETY: called between BeginMode3D/EndMode3D on the render thread; the
    // push is always matched by the pop below.
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlMultMatrixf(m.as_ptr());
    }
    draw();
    unsafe {
        ffi::rlPopMatrix();
    }
}

impl<D: RaylibDraw3D> Renderer for RaylibRenderer<'_, D> {
    fn draw_entity(&mut self, call: &DrawCall) {
        let color = material_color(call);
        let d = &mut *self.d;
        with_transform(&call.transform, || match call.mesh {
            MeshHandle::Ball => d.draw_sphere(Vector3::zero(), 0.5, color),
            MeshHandle::Skeleton => {
                d.draw_cube(Vector3::new(0.0, 0.0, 0.0), 0.5, 1.66, 0.3, color);
                d.draw_sphere(Vector3::new(0.0, 1.0, 0.0), 0.22, color);
            }
            MeshHandle::Lantern => d.draw_cube(Vector3::zero(), 0.3, 0.5, 0.3, color),
            MeshHandle::Ground | MeshHandle::Cube | MeshHandle::ParticleCube => {
                d.draw_cube(Vector3::zero(), 1.0, 1.0, 1.0, color)
            }
        });
    }
}

fn camera_for(player: &PlayerState) -> Camera3D {
    let look = player.look_dir;
    let (eye, target) = if player.first_person {
        (player.position, player.position + look)
    } else {
        let eye = player.position - look * THIRD_PERSON_DISTANCE
            + Vec3::Y * THIRD_PERSON_HEIGHT;
        (eye, player.position)
    };
    Camera3D::perspective(v3(eye), v3(target), Vector3::new(0.0, 1.0, 0.0), FOV_Y)
}

/// Open a window and run the simulation at the display's frame rate until it
/// is closed.
pub fn run_window(world: &mut World, schedule: &mut Schedule) -> Result<(), String> {
    let (width, height, fps) = {
        let config = world
            .get_resource::<GameConfig>()
            .ok_or_else(|| "GameConfig resource is missing".to_string())?;
        (config.window_width, config.window_height, config.target_fps)
    };

    let (mut rl, thread) = ::raylib::init()
        .size(width as i32, height as i32)
        .title("Spooky Maze")
        .build();
    rl.set_target_fps(fps);
    rl.disable_cursor();
    info!("Opened {}x{} window", width, height);

    let mut input = RaylibInput::default();
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        if rl.is_key_pressed(KeyboardKey::KEY_ONE) {
            world.resource_mut::<PlayerState>().first_person = true;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_TWO) {
            world.resource_mut::<PlayerState>().first_person = false;
        }

        let mut source = RaylibInputSource {
            look: &mut input,
            rl: &rl,
        };
        tick_with_input(world, schedule, &mut source, dt);

        let camera = camera_for(world.resource::<PlayerState>());
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(8, 8, 14, 255));
        {
            let mut d3 = d.begin_mode3D(camera);
            let mut renderer = RaylibRenderer::new(&mut d3);
            render_draw_list(&mut renderer, world.resource::<DrawList>());
        }
        d.draw_fps(10, 10);
    }
    Ok(())
}
