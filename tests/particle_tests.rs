// Host-side tests for the particle field.

use glam::Vec2;
use site_core::{backing_size, FieldParams, Particle, ParticleField, Surface};

#[derive(Default)]
struct Recorder {
    clears: usize,
    discs: Vec<(Vec2, f32)>,
    edges: Vec<(Vec2, Vec2, f32)>,
}

impl Surface for Recorder {
    fn clear(&mut self, _extent: Vec2) {
        self.clears += 1;
        self.discs.clear();
        self.edges.clear();
    }
    fn fill_disc(&mut self, center: Vec2, radius: f32) {
        self.discs.push((center, radius));
    }
    fn stroke_edge(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.edges.push((from, to, alpha));
    }
}

fn field(width: f32, height: f32) -> ParticleField {
    ParticleField::new(FieldParams::default(), width, height, 7)
}

fn still(x: f32, y: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        radius: 2.0,
    }
}

#[test]
fn count_depends_on_viewport_width() {
    assert_eq!(field(320.0, 640.0).particles().len(), 40);
    assert_eq!(field(767.9, 1024.0).particles().len(), 40);
    assert_eq!(field(768.0, 1024.0).particles().len(), 90);
    assert_eq!(field(1920.0, 1080.0).particles().len(), 90);
}

#[test]
fn particles_start_inside_surface_with_configured_ranges() {
    let f = field(1280.0, 720.0);
    for p in f.particles() {
        assert!((0.0..=1280.0).contains(&p.pos.x));
        assert!((0.0..=720.0).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= 0.2 && p.vel.y.abs() <= 0.2, "vel {:?}", p.vel);
        assert!((1.0..=3.0).contains(&p.radius));
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = field(1024.0, 768.0);
    let b = field(1024.0, 768.0);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn resize_across_breakpoint_rebuilds() {
    let mut f = field(1280.0, 800.0);
    assert!(f.resize(400.0, 800.0));
    assert_eq!(f.particles().len(), 40);
    for p in f.particles() {
        assert!(p.pos.x <= 400.0);
    }
    assert!(f.resize(1280.0, 800.0));
    assert_eq!(f.particles().len(), 90);
}

#[test]
fn minor_resize_keeps_particles() {
    let mut f = field(1280.0, 800.0);
    let before = f.particles().to_vec();
    assert!(!f.resize(1100.0, 700.0));
    assert_eq!(f.particles(), &before[..]);
    assert_eq!(f.extent(), Vec2::new(1100.0, 700.0));
}

#[test]
fn resize_within_tolerance_does_not_rebuild() {
    let params = FieldParams {
        count_narrow: 80,
        count_wide: 95,
        ..FieldParams::default()
    };
    let mut f = ParticleField::new(params, 1000.0, 600.0, 1);
    assert_eq!(f.particles().len(), 95);
    assert!(!f.resize(500.0, 600.0));
    assert_eq!(f.particles().len(), 95);
}

#[test]
fn particles_stay_within_one_step_of_bounds() {
    let mut f = field(300.0, 200.0);
    let slack = 0.21;
    for _ in 0..20_000 {
        f.update();
        for p in f.particles() {
            assert!(p.pos.x >= -slack && p.pos.x <= 300.0 + slack, "x {}", p.pos.x);
            assert!(p.pos.y >= -slack && p.pos.y <= 200.0 + slack, "y {}", p.pos.y);
        }
    }
}

#[test]
fn particle_outside_after_shrink_heads_back() {
    let mut f = field(1280.0, 800.0);
    // both widths are above the breakpoint, so no rebuild
    assert!(!f.resize(1000.0, 800.0));
    *f.particles_mut() = vec![Particle {
        pos: Vec2::new(1200.0, 100.0),
        vel: Vec2::new(0.2, 0.0),
        radius: 1.0,
    }];
    f.update();
    assert!(f.particles()[0].vel.x < 0.0);
    let x = f.particles()[0].pos.x;
    f.update();
    assert!(f.particles()[0].pos.x < x);
}

#[test]
fn pointer_parked_at_edge_cannot_push_particle_off_surface() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![Particle {
        pos: Vec2::new(5.0, 400.0),
        vel: Vec2::new(-0.2, 0.0),
        radius: 1.0,
    }];
    f.set_pointer(10.0, 400.0);
    let mut min_x = f32::MAX;
    for _ in 0..5_000 {
        f.update();
        min_x = min_x.min(f.particles()[0].pos.x);
    }
    assert!(min_x >= -0.21, "min x {min_x}");
}

#[test]
fn pointer_push_stops_at_far_edge() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![still(999.9, 400.0)];
    f.set_pointer(990.0, 400.0);
    f.update();
    assert_eq!(f.particles()[0].pos.x, 1000.0);
}

#[test]
fn backing_store_scales_with_pixel_ratio() {
    assert_eq!(backing_size(1280.0, 720.0, 1.0), (1280, 720));
    assert_eq!(backing_size(1280.0, 720.0, 2.0), (2560, 1440));
    assert_eq!(backing_size(375.0, 667.0, 1.5), (563, 1001));
    assert_eq!(backing_size(800.0, 600.0, 0.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, f64::NAN), (800, 600));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
}

#[test]
fn velocity_reflects_at_edge() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![Particle {
        pos: Vec2::new(0.1, 400.0),
        vel: Vec2::new(-0.2, 0.0),
        radius: 1.0,
    }];
    f.update();
    assert!(f.particles()[0].vel.x > 0.0);
}

#[test]
fn pointer_pushes_nearby_particle_away() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![still(100.0, 100.0)];
    f.set_pointer(150.0, 100.0);
    f.update();
    // d = 50, force = 150/200, push = 0.75 * 0.5
    let p = f.particles()[0].pos;
    assert!((p.x - 99.625).abs() < 1e-4, "x {}", p.x);
    assert!((p.y - 100.0).abs() < 1e-6);
}

#[test]
fn pointer_push_falls_off_with_distance() {
    let mut near = field(1000.0, 800.0);
    *near.particles_mut() = vec![still(500.0, 500.0)];
    near.set_pointer(500.0, 520.0);
    near.update();

    let mut far = field(1000.0, 800.0);
    *far.particles_mut() = vec![still(500.0, 500.0)];
    far.set_pointer(500.0, 680.0);
    far.update();

    let near_push = 500.0 - near.particles()[0].pos.y;
    let far_push = 500.0 - far.particles()[0].pos.y;
    assert!(near_push > far_push && far_push > 0.0);
}

#[test]
fn pointer_out_of_range_or_coincident_leaves_particle() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![still(100.0, 100.0), still(600.0, 600.0)];
    f.set_pointer(100.0, 100.0);
    f.update();
    assert_eq!(f.particles()[0].pos, Vec2::new(100.0, 100.0));
    assert_eq!(f.particles()[1].pos, Vec2::new(600.0, 600.0));
}

#[test]
fn no_pointer_until_first_move() {
    let mut f = field(1000.0, 800.0);
    assert!(f.pointer().pos.is_none());
    assert_eq!(f.pointer().radius, 200.0);
    f.set_pointer(3.0, 4.0);
    assert_eq!(f.pointer().pos, Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn edge_alpha_falls_to_zero_at_threshold() {
    let p = FieldParams::default();
    assert_eq!(p.edge_alpha(0.0), Some(p.edge_alpha_max));
    let mut prev = f32::MAX;
    for d in 0..150 {
        let a = p.edge_alpha(d as f32).expect("inside threshold");
        assert!(a < prev || d == 0);
        assert!(a > 0.0);
        prev = a;
    }
    assert_eq!(p.edge_alpha(150.0), None);
    assert_eq!(p.edge_alpha(400.0), None);
}

#[test]
fn draw_renders_discs_and_close_pairs_once() {
    let mut f = field(1000.0, 800.0);
    *f.particles_mut() = vec![still(100.0, 100.0), still(200.0, 100.0), still(900.0, 700.0)];
    let mut s = Recorder::default();
    f.draw(&mut s);
    assert_eq!(s.clears, 1);
    assert_eq!(s.discs.len(), 3);
    assert_eq!(s.edges.len(), 1);
    let (a, b, alpha) = s.edges[0];
    assert_eq!((a, b), (Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)));
    let expected = f.params.edge_alpha_max * (1.0 - 100.0 / 150.0);
    assert!((alpha - expected).abs() < 1e-6);
}

#[test]
fn full_frame_visits_each_pair_at_most_once() {
    let mut f = field(1920.0, 1080.0);
    let n = f.particles().len();
    let mut s = Recorder::default();
    f.frame(&mut s);
    assert_eq!(s.discs.len(), n);
    assert!(s.edges.len() <= n * (n - 1) / 2);
    for (a, b, alpha) in &s.edges {
        assert!(a.distance(*b) < f.params.connect_distance);
        assert!(*alpha > 0.0 && *alpha <= f.params.edge_alpha_max);
    }
}
