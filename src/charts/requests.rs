use serde::{Deserialize, Serialize};

use crate::error::LabResult;
use crate::params::{ArgumentChoice, Measurement, ModelType, PlotArgs, ProductType};

/// Arguments of the actuals chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualsPlotRequest {
    pub y_column: Measurement,
    pub product_type: ProductType,
    #[serde(default)]
    pub save_plot: bool,
}

impl ActualsPlotRequest {
    #[must_use]
    pub fn new(y_column: Measurement, product_type: ProductType) -> Self {
        Self {
            y_column,
            product_type,
            save_plot: false,
        }
    }

    #[must_use]
    pub fn with_save_plot(mut self, save_plot: bool) -> Self {
        self.save_plot = save_plot;
        self
    }

    /// Reads `y_column`, `product_type` and `save_plot`, in that order.
    pub fn from_args(args: &PlotArgs) -> LabResult<Self> {
        Ok(Self {
            y_column: args.choice("y_column")?,
            product_type: args.choice("product_type")?,
            save_plot: args.flag("save_plot")?,
        })
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - {}", self.y_column, self.product_type.label())
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{} {} - Actuals.png",
            self.y_column,
            self.product_type.label()
        )
    }
}

/// Arguments shared by the train/test/prediction and forecast charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPlotRequest {
    pub pred_parameter: Measurement,
    pub product_type: ProductType,
    pub model_type: ModelType,
    #[serde(default)]
    pub save_plot: bool,
}

impl ModelPlotRequest {
    #[must_use]
    pub fn new(pred_parameter: Measurement, product_type: ProductType, model_type: ModelType) -> Self {
        Self {
            pred_parameter,
            product_type,
            model_type,
            save_plot: false,
        }
    }

    #[must_use]
    pub fn with_save_plot(mut self, save_plot: bool) -> Self {
        self.save_plot = save_plot;
        self
    }

    /// Reads `pred_parameter`, `product_type`, `model_type` and `save_plot`,
    /// in that order.
    pub fn from_args(args: &PlotArgs) -> LabResult<Self> {
        Ok(Self {
            pred_parameter: args.choice("pred_parameter")?,
            product_type: args.choice("product_type")?,
            model_type: args.choice("model_type")?,
            save_plot: args.flag("save_plot")?,
        })
    }

    /// `"{parameter} {Product} - {model} {suffix}"`.
    #[must_use]
    pub fn label(&self, suffix: &str) -> String {
        format!(
            "{} {} - {} {suffix}",
            self.pred_parameter,
            self.product_type.label(),
            self.model_type.token()
        )
    }

    #[must_use]
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}.png", self.label(suffix))
    }
}
