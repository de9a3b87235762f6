//! Ambient constellation: drifting points joined by fading edges.

use glam::Vec2;
use rand::prelude::*;

/// Tuning for [`ParticleField`]. The default matches the site background.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count_narrow: usize,
    pub count_wide: usize,
    /// Viewports narrower than this (logical px) get `count_narrow`.
    pub width_breakpoint: f32,
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub connect_distance: f32,
    pub edge_alpha_max: f32,
    pub pointer_radius: f32,
    pub pointer_push: f32,
    /// Allowed drift between the live count and the target before a resize
    /// rebuilds the whole set.
    pub resize_tolerance: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count_narrow: 40,
            count_wide: 90,
            width_breakpoint: 768.0,
            speed: 0.4,
            radius_min: 1.0,
            radius_max: 3.0,
            connect_distance: 150.0,
            edge_alpha_max: 0.25,
            pointer_radius: 200.0,
            pointer_push: 0.5,
            resize_tolerance: 20,
        }
    }
}

impl FieldParams {
    #[inline]
    pub fn target_count(&self, width: f32) -> usize {
        if width < self.width_breakpoint {
            self.count_narrow
        } else {
            self.count_wide
        }
    }

    /// Edge opacity for two particles `distance` apart, or `None` when they
    /// are too far apart to be joined.
    #[inline]
    pub fn edge_alpha(&self, distance: f32) -> Option<f32> {
        (distance < self.connect_distance)
            .then(|| self.edge_alpha_max * (1.0 - distance / self.connect_distance))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Option<Vec2>,
    pub radius: f32,
}

/// Backing-store size in device pixels for a `css_w` x `css_h` canvas.
/// Bad ratios (zero, negative, NaN) fall back to 1.
pub fn backing_size(css_w: f32, css_h: f32, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let px = |v: f32| ((v.max(0.0) as f64 * dpr).round() as u32).max(1);
    (px(css_w), px(css_h))
}

/// Drawing target for the field. Colors are the surface's concern.
pub trait Surface {
    fn clear(&mut self, extent: Vec2);
    fn fill_disc(&mut self, center: Vec2, radius: f32);
    fn stroke_edge(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

pub struct ParticleField {
    pub params: FieldParams,
    extent: Vec2,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f32, height: f32, seed: u64) -> Self {
        let pointer = PointerState {
            pos: None,
            radius: params.pointer_radius,
        };
        let mut field = Self {
            params,
            extent: Vec2::new(width, height),
            particles: Vec::new(),
            pointer,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let n = self.params.target_count(self.extent.x);
        let (w, h) = (self.extent.x.max(0.0), self.extent.y.max(0.0));
        let speed = self.params.speed;
        let (r0, r1) = (self.params.radius_min, self.params.radius_max);
        let rng = &mut self.rng;
        self.particles = (0..n)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * speed,
                radius: r0 + rng.gen::<f32>() * (r1 - r0),
            })
            .collect();
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.pos = Some(Vec2::new(x, y));
    }

    /// Adopt a new surface size. Returns true when the particle set was
    /// rebuilt because its count drifted too far from the new target.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.extent = Vec2::new(width, height);
        let target = self.params.target_count(width);
        if self.particles.len().abs_diff(target) > self.params.resize_tolerance {
            log::debug!(
                "[particles] rebuild {} -> {} at {:.0}x{:.0}",
                self.particles.len(),
                target,
                width,
                height
            );
            self.populate();
            return true;
        }
        false
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        let extent = self.extent;
        let pointer = self.pointer;
        let push = self.params.pointer_push;
        for p in &mut self.particles {
            p.pos += p.vel;

            // Flip only while heading further out, so a particle left outside
            // by a shrink or a pointer push drifts back instead of jittering.
            if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > extent.x && p.vel.x > 0.0) {
                p.vel.x = -p.vel.x;
            }
            if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > extent.y && p.vel.y > 0.0) {
                p.vel.y = -p.vel.y;
            }

            if let Some(m) = pointer.pos {
                let d = p.pos - m;
                let dist = d.length();
                if dist > 0.0 && dist < pointer.radius {
                    let force = (pointer.radius - dist) / pointer.radius;
                    // a push never carries a particle further out than it already was
                    let lo = Vec2::ZERO.min(p.pos);
                    let hi = extent.max(p.pos);
                    p.pos = (p.pos + d / dist * force * push).clamp(lo, hi);
                }
            }
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.extent);
        for p in &self.particles {
            surface.fill_disc(p.pos, p.radius);
        }
        self.for_each_edge(|a, b, alpha| surface.stroke_edge(a, b, alpha));
    }

    /// One display refresh: move, then render.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        self.update();
        self.draw(surface);
    }

    /// Visit each unordered pair once; only pairs closer than the connect
    /// distance reach `f`.
    pub fn for_each_edge(&self, mut f: impl FnMut(Vec2, Vec2, f32)) {
        let ps = &self.particles;
        for i in 0..ps.len() {
            for j in (i + 1)..ps.len() {
                let dist = ps[i].pos.distance(ps[j].pos);
                if let Some(alpha) = self.params.edge_alpha(dist) {
                    f(ps[i].pos, ps[j].pos, alpha);
                }
            }
        }
    }

    /// Place particles by hand, e.g. to stage a scene.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}
