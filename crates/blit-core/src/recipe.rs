//! JSON adjustment recipes.
//!
//! An adjustment is written as a positional array, its name followed by its
//! arguments, and a recipe is a list of them applied in order:
//!
//! ```json
//! [
//!   ["curves", [0, 204, 255]],
//!   ["curves2", [[0, 22], [128, 128], [255, 255]],
//!               [[0, 29], [128, 128], [255, 255]],
//!               [[0, 65], [128, 128], [255, 228]]],
//!   ["threshold", 128]
//! ]
//! ```
//!
//! `threshold` and `curves2` take one argument for all channels or three for
//! red, green and blue.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::adjust::channel_spec::ChannelSpec;
use crate::adjust::curves::Curve;
use crate::adjust::solver::ControlTriple;
use crate::adjust::threshold::Threshold;
use crate::error::{BlitError, Result};
use crate::image::Image;

/// One configured adjustment. Arguments are kept in the 0–255 level domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub enum Adjustment {
    Threshold(ChannelSpec<f32>),
    Curves([f32; 3]),
    Curves2(ChannelSpec<ControlTriple>),
}

impl Adjustment {
    /// Name used in the recipe format.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Threshold(_) => "threshold",
            Self::Curves(_) => "curves",
            Self::Curves2(_) => "curves2",
        }
    }

    pub fn apply(&self, image: &Image) -> Result<Image> {
        match self {
            Self::Threshold(levels) => Threshold::new(*levels).apply(image),
            Self::Curves(black_grey_white) => Curve::levels(*black_grey_white)?.apply(image),
            Self::Curves2(maps) => Curve::from_spec(maps)?.apply(image),
        }
    }
}

fn invalid(message: impl Into<String>) -> BlitError {
    BlitError::InvalidRecipe(message.into())
}

/// Parse one to three positional arguments into a channel spec.
fn channel_args<T>(name: &str, args: &[Value]) -> Result<ChannelSpec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if args.is_empty() || args.len() > 3 {
        return Err(invalid(format!(
            "{name} takes 1 or 3 arguments, got {}",
            args.len()
        )));
    }
    let mut parsed = args
        .iter()
        .map(|v| serde_json::from_value::<T>(v.clone()))
        .collect::<std::result::Result<Vec<T>, _>>()?
        .into_iter();
    let red = parsed
        .next()
        .ok_or_else(|| invalid(format!("{name} is missing its first argument")))?;
    Ok(ChannelSpec::from_args(red, parsed.next(), parsed.next()))
}

fn spec_values<T>(spec: ChannelSpec<T>, to_value: impl Fn(T) -> Value) -> Vec<Value> {
    match spec {
        ChannelSpec::Uniform(v) => vec![to_value(v)],
        ChannelSpec::PerChannel(r, g, b) => vec![to_value(r), to_value(g), to_value(b)],
    }
}

fn triple_value(triple: ControlTriple) -> Value {
    Value::Array(
        triple
            .iter()
            .map(|p| json!([p.input, p.output]))
            .collect(),
    )
}

impl TryFrom<Vec<Value>> for Adjustment {
    type Error = BlitError;

    fn try_from(raw: Vec<Value>) -> Result<Self> {
        let (name, args) = raw
            .split_first()
            .ok_or_else(|| invalid("empty adjustment"))?;
        let name = name
            .as_str()
            .ok_or_else(|| invalid(format!("adjustment name must be a string, got {name}")))?;

        match name {
            "threshold" => Ok(Self::Threshold(channel_args(name, args)?)),
            "curves" => match args {
                [levels] => Ok(Self::Curves(serde_json::from_value(levels.clone())?)),
                _ => Err(invalid(format!(
                    "curves takes 1 argument, got {}",
                    args.len()
                ))),
            },
            "curves2" => Ok(Self::Curves2(channel_args(name, args)?)),
            other => Err(invalid(format!("unknown adjustment \"{other}\""))),
        }
    }
}

impl From<Adjustment> for Vec<Value> {
    fn from(adjustment: Adjustment) -> Self {
        let mut out = vec![Value::from(adjustment.name())];
        match adjustment {
            Adjustment::Threshold(levels) => out.extend(spec_values(levels, |v| json!(v))),
            Adjustment::Curves(levels) => out.push(json!(levels)),
            Adjustment::Curves2(maps) => out.extend(spec_values(maps, triple_value)),
        }
        out
    }
}

/// An ordered list of adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    pub adjustments: Vec<Adjustment>,
}

impl Recipe {
    /// Parse a recipe. Malformed JSON is a [`BlitError::Json`]; well-formed
    /// JSON naming an unknown adjustment or giving the wrong number of
    /// arguments is a [`BlitError::InvalidRecipe`].
    pub fn from_json(text: &str) -> Result<Self> {
        let rows: Vec<Vec<Value>> = serde_json::from_str(text)?;
        let adjustments = rows
            .into_iter()
            .map(Adjustment::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { adjustments })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Apply every adjustment in order. The first failure aborts the chain.
    pub fn apply(&self, image: &Image) -> Result<Image> {
        image.validate()?;
        let mut current = image.clone();
        for (index, adjustment) in self.adjustments.iter().enumerate() {
            tracing::debug!("applying adjustment {index}: {}", adjustment.name());
            current = adjustment.apply(&current)?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::solver::ControlPoint;

    #[test]
    fn test_parse_uniform_threshold() {
        let adj: Adjustment = serde_json::from_str(r#"["threshold", 128]"#).unwrap();
        assert_eq!(adj, Adjustment::Threshold(ChannelSpec::Uniform(128.0)));
    }

    #[test]
    fn test_parse_two_thresholds_uses_first() {
        let adj: Adjustment = serde_json::from_str(r#"["threshold", 10, 20]"#).unwrap();
        assert_eq!(adj, Adjustment::Threshold(ChannelSpec::Uniform(10.0)));
    }

    #[test]
    fn test_parse_per_channel_curves2() {
        let adj: Adjustment = serde_json::from_str(
            r#"["curves2",
                [[0, 22], [128, 128], [255, 255]],
                [[0, 29], [128, 128], [255, 255]],
                [[0, 65], [128, 128], [255, 228]]]"#,
        )
        .unwrap();
        let Adjustment::Curves2(ChannelSpec::PerChannel(_, _, blue)) = &adj else {
            panic!("expected per-channel curves2, got {adj:?}");
        };
        assert_eq!(blue[0], ControlPoint::new(0.0, 65.0));
        assert_eq!(blue[2], ControlPoint::new(255.0, 228.0));
    }

    #[test]
    fn test_parse_curves() {
        let adj: Adjustment = serde_json::from_str(r#"["curves", [0, 204, 255]]"#).unwrap();
        assert_eq!(adj, Adjustment::Curves([0.0, 204.0, 255.0]));
    }

    #[test]
    fn test_unknown_adjustment_is_rejected() {
        let err = Recipe::from_json(r#"[["sharpen", 3]]"#).unwrap_err();
        assert!(matches!(err, BlitError::InvalidRecipe(_)), "{err}");
        assert!(err.to_string().contains("unknown adjustment"), "{err}");
    }

    #[test]
    fn test_recipe_wrong_arity_is_invalid_recipe() {
        for text in [
            r#"[["curves"]]"#,
            r#"[["threshold", 1, 2, 3, 4]]"#,
            r#"[[]]"#,
            r#"[[7, 1]]"#,
        ] {
            let err = Recipe::from_json(text).unwrap_err();
            assert!(matches!(err, BlitError::InvalidRecipe(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = Recipe::from_json("[[\"threshold\", 1]").unwrap_err();
        assert!(matches!(err, BlitError::Json(_)), "{err}");
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(serde_json::from_str::<Adjustment>(r#"["curves"]"#).is_err());
        assert!(serde_json::from_str::<Adjustment>(r#"["threshold", 1, 2, 3, 4]"#).is_err());
        assert!(serde_json::from_str::<Adjustment>(r#"[]"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_positional_form() {
        let adj = Adjustment::Threshold(ChannelSpec::PerChannel(1.0, 2.0, 3.0));
        let text = serde_json::to_string(&adj).unwrap();
        assert_eq!(text, r#"["threshold",1.0,2.0,3.0]"#);
    }

    #[test]
    fn test_recipe_applies_in_order() {
        let recipe = Recipe::from_json(
            r#"[["curves2", [[0, 255], [128, 128], [255, 0]]], ["threshold", 128]]"#,
        )
        .unwrap();
        assert_eq!(recipe.adjustments.len(), 2);

        let image = Image::filled(2, 2, [0.1, 0.9, 0.5, 1.0]);
        let out = recipe.apply(&image).unwrap();
        // Inverted first, so dark red ends up above the cutoff.
        assert!(out.red.iter().all(|&v| v == 1.0));
        assert!(out.green.iter().all(|&v| v == 0.0));
        assert_eq!(out.alpha, image.alpha);
    }

    #[test]
    fn test_empty_recipe_is_identity() {
        let image = Image::filled(1, 1, [0.2, 0.4, 0.6, 0.8]);
        assert_eq!(Recipe::default().apply(&image).unwrap(), image);
    }
}
