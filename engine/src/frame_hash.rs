//! Frame hashing for determinism checks.
//!
//! A run is reduced to one SHA-256 digest per rendered frame, so two runs of the same input
//! script can be compared without keeping the pixel data around.

use sha2::{Digest, Sha256};

use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::{RgbaBufferSurface, Surface, SurfaceSize};
use crate::{GameLogic, HeadlessRunner};

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    hex::encode(hasher.finalize())
}

/// Renders `state` into `surface` and returns the digest of the resulting frame.
pub fn render_and_hash<S, R>(surface: &mut RgbaBufferSurface, state: &S, render: &mut R) -> String
where
    R: FnMut(&S, &mut dyn Renderer2d),
{
    let size = surface.size();
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
        gfx.begin_frame(size);
        render(state, &mut gfx);
    }
    if let Err(never) = surface.present() {
        match never {}
    }
    rgba_sha256_hex(surface.frame())
}

/// Steps `game` through `inputs`, hashing the initial frame and the frame after every step.
pub fn render_hashes<G, I, R>(game: G, inputs: I, size: SurfaceSize, mut render: R) -> Vec<String>
where
    G: GameLogic,
    I: IntoIterator<Item = G::Input>,
    R: FnMut(&G::State, &mut dyn Renderer2d),
{
    let mut runner = HeadlessRunner::new(game);
    let mut surface = RgbaBufferSurface::new(size);

    let mut hashes = vec![render_and_hash(&mut surface, runner.state(), &mut render)];
    for input in inputs {
        runner.step(input);
        hashes.push(render_and_hash(&mut surface, runner.state(), &mut render));
    }
    hashes
}
