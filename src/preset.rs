//! Filter selection.
//!
//! A [`Filter`] names one of the three transforms together with its
//! parameters, so a front end can store or load the user's choice as plain
//! configuration and run it against one or two images.

use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::filters::{blend, halftone, stylize};
use crate::ops::ImageOps;
use crate::params::{BlendParams, HalftoneParams, StylizeParams};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter", content = "params", rename_all = "snake_case")]
pub enum Filter {
    Stylization(StylizeParams),
    Halftoning(HalftoneParams),
    Blending(BlendParams),
}

impl Filter {
    /// Parse a filter choice such as
    /// `{"filter": "halftoning", "params": {"block_size": 4}}`.
    pub fn from_json(config: &str) -> Result<Self> {
        Ok(serde_json::from_str(config)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Filter::Stylization(_) => "stylization",
            Filter::Halftoning(_) => "halftoning",
            Filter::Blending(_) => "blending",
        }
    }

    /// Whether [`Filter::apply`] needs a second image.
    pub fn needs_second_image(&self) -> bool {
        matches!(self, Filter::Blending(_))
    }

    /// Run the selected transform.
    ///
    /// `secondary` is only read by blending and ignored otherwise.
    pub fn apply<O: ImageOps + ?Sized>(
        &self,
        ops: &O,
        primary: ArrayView3<u8>,
        secondary: Option<ArrayView3<u8>>,
    ) -> Result<Array3<u8>> {
        debug!("Applying {} to {:?}", self.name(), primary.dim());
        match self {
            Filter::Stylization(params) => stylize::stylize_with(ops, primary, params),
            Filter::Halftoning(params) => halftone::halftone_with(ops, primary, params),
            Filter::Blending(params) => {
                let secondary = secondary.ok_or(Error::MissingSecondImage)?;
                blend::blend_with(ops, primary, secondary, params)
            }
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Stylization(StylizeParams::default())
    }
}
