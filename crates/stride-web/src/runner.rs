use stride_engine::{
    AnimationClip, Animator, FrameBuffer, GaitConfig, GaitPreset,
    Playback, Rig, StrideError, Vec2,
};

/// Owns everything one browser canvas needs to pull frames from the engine.
///
/// `lib.rs` keeps a single `thread_local!` AnimationRunner and exports free
/// functions via `#[wasm_bindgen]` around it.
pub struct AnimationRunner {
    rig: Option<Rig>,
    clip: Option<AnimationClip>,
    animator: Option<Animator>,
    config: GaitConfig,
    playback: Playback,
    origin: Vec2,
    buffer: FrameBuffer,
}

impl AnimationRunner {
    pub fn new() -> Self {
        Self {
            rig: None,
            clip: None,
            animator: None,
            config: GaitPreset::default().config(),
            playback: Playback::new(),
            origin: Vec2::ZERO,
            buffer: FrameBuffer::new(),
        }
    }

    pub fn load_rig(&mut self, json: &str) -> Result<(), StrideError> {
        let rig = Rig::from_json(json)?;
        log::info!("rig loaded: {} parts", rig.len());
        self.rig = Some(rig);
        self.refresh();
        Ok(())
    }

    pub fn load_clip(&mut self, json: &str) -> Result<(), StrideError> {
        let clip = AnimationClip::from_json(json)?;
        log::info!("clip loaded: {}s, {} keyframes", clip.duration, clip.keyframes.len());
        self.playback.seek(self.playback.time, clip.duration);
        self.clip = Some(clip);
        self.rebuild_animator();
        Ok(())
    }

    pub fn set_preset(&mut self, name: &str) {
        self.config = GaitPreset::from_name(name).config();
        self.rebuild_animator();
    }

    pub fn set_config(&mut self, json: &str) -> Result<(), StrideError> {
        self.config = GaitConfig::from_json(json)?;
        self.rebuild_animator();
        Ok(())
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Vec2::new(x, y);
        self.refresh();
    }

    /// Advance playback by `dt` seconds and recompose the frame.
    pub fn tick(&mut self, dt: f32) {
        if let Some(animator) = &self.animator {
            self.playback.tick(dt, animator.duration());
        }
        self.refresh();
    }

    pub fn seek(&mut self, time: f32) {
        if let Some(animator) = &self.animator {
            self.playback.seek(time, animator.duration());
        }
        self.refresh();
    }

    pub fn time(&self) -> f32 {
        self.playback.time
    }

    fn rebuild_animator(&mut self) {
        self.animator = self
            .clip
            .clone()
            .map(|clip| Animator::new(clip, self.config.clone()));
        self.refresh();
    }

    /// Recompose the current frame into the flat buffer.
    /// Without both a rig and a clip the buffer is left empty.
    fn refresh(&mut self) {
        match (&self.rig, &self.animator) {
            (Some(rig), Some(animator)) => {
                let transforms = animator.frame(rig, self.playback.time, self.origin);
                self.buffer.fill(&transforms);
            }
            _ => self.buffer.clear(),
        }
    }

    // ---- Accessors for zero-copy reads from JS ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    /// Instance data as `[x, y, rotation, band]` per part.
    pub fn as_floats(&self) -> &[f32] {
        self.buffer.as_floats()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn part_names(&self) -> &[String] {
        &self.buffer.names
    }
}

impl Default for AnimationRunner {
    fn default() -> Self {
        Self::new()
    }
}
