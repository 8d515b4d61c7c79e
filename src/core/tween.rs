//! Tween rules: pure mappings from track progress to style values.

/// Animatable style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Percent of the element's own width.
    TranslateX,
    /// Pixels.
    TranslateY,
    Scale,
    /// Degrees.
    Rotate,
    /// Pixels of CSS blur.
    Blur,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Opacity,
        Property::TranslateX,
        Property::TranslateY,
        Property::Scale,
        Property::Rotate,
        Property::Blur,
    ];

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

/// A partial set of property values. Unset properties are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StylePatch {
    values: [Option<f32>; 6],
}

impl StylePatch {
    pub fn one(property: Property, value: f32) -> Self {
        let mut patch = Self::default();
        patch.set(property, value);
        patch
    }

    /// Non-finite values are dropped; opacity is clamped to [0, 1].
    pub fn set(&mut self, property: Property, value: f32) {
        if !value.is_finite() {
            return;
        }
        let value = match property {
            Property::Opacity => value.clamp(0.0, 1.0),
            Property::Blur => value.max(0.0),
            _ => value,
        };
        self.values[property.slot()] = Some(value);
    }

    #[inline]
    pub fn get(&self, property: Property) -> Option<f32> {
        self.values[property.slot()]
    }

    #[inline]
    pub fn opacity(&self) -> Option<f32> {
        self.get(Property::Opacity)
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        Property::ALL
            .iter()
            .filter_map(move |p| self.get(*p).map(|v| (*p, v)))
    }

    /// CSS `transform` value for the transform properties, if any are set.
    pub fn css_transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(x) = self.get(Property::TranslateX) {
            parts.push(format!("translateX({x:.3}%)"));
        }
        if let Some(y) = self.get(Property::TranslateY) {
            parts.push(format!("translateY({y:.3}px)"));
        }
        if let Some(s) = self.get(Property::Scale) {
            parts.push(format!("scale({s:.4})"));
        }
        if let Some(r) = self.get(Property::Rotate) {
            parts.push(format!("rotate({r:.3}deg)"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// A pure function of progress, described as data so that re-registering
/// the same rules always reproduces the same frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenRule {
    /// Opacity 0 → 1 across progress `[start, end]`.
    FadeIn { start: f32, end: f32 },
    /// Opacity 1 → 0 across progress `[start, end]`.
    FadeOut { start: f32, end: f32 },
    /// Fade in across `[in_start, in_end]`, hold, fade out across
    /// `[out_start, out_end]`.
    Window {
        in_start: f32,
        in_end: f32,
        out_start: f32,
        out_end: f32,
    },
    /// Unclamped linear interpolation of one property over the whole track.
    Lerp {
        property: Property,
        from: f32,
        to: f32,
    },
    Constant { property: Property, value: f32 },
}

impl TweenRule {
    pub const fn fade_in(start: f32, end: f32) -> Self {
        TweenRule::FadeIn { start, end }
    }

    pub const fn fade_out(start: f32, end: f32) -> Self {
        TweenRule::FadeOut { start, end }
    }

    pub const fn lerp(property: Property, from: f32, to: f32) -> Self {
        TweenRule::Lerp { property, from, to }
    }

    pub fn eval(&self, progress: f32) -> StylePatch {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        match *self {
            TweenRule::FadeIn { start, end } => {
                StylePatch::one(Property::Opacity, ramp(p, start, end))
            }
            TweenRule::FadeOut { start, end } => {
                StylePatch::one(Property::Opacity, 1.0 - ramp(p, start, end))
            }
            TweenRule::Window {
                in_start,
                in_end,
                out_start,
                out_end,
            } => {
                let opacity = if p < out_start {
                    ramp(p, in_start, in_end)
                } else {
                    1.0 - ramp(p, out_start, out_end)
                };
                StylePatch::one(Property::Opacity, opacity)
            }
            TweenRule::Lerp { property, from, to } => {
                StylePatch::one(property, from + (to - from) * p)
            }
            TweenRule::Constant { property, value } => StylePatch::one(property, value),
        }
    }
}

/// `(p - start) / (end - start)` clamped to [0, 1]; steps at `start` when
/// the window is empty.
#[inline]
pub fn ramp(p: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if p >= start { 1.0 } else { 0.0 };
    }
    ((p - start) / (end - start)).clamp(0.0, 1.0)
}
