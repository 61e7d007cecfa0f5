// rrdtool graph command to normalized model conversion
use crate::application::model_converter::ModelConverter;
use crate::domain::graph_model::{
    AttributeMetric, ExpressionMetric, GraphTemplate, Metric, NormalizedModel, Series, SeriesType,
};
use crate::error::MigrationError;
use crate::infrastructure::rpn::rpn_to_infix;

/// Converts OpenNMS prefab graph commands (`DEF`, `CDEF`, `AREA`, `LINE`, ...)
/// into metrics and series.
#[derive(Debug, Clone, Copy, Default)]
pub struct RrdGraphConverter;

/// Split a command line on whitespace. Double quotes group words and are
/// removed; backslash escapes are kept for the field splitter.
fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Split a token on unescaped colons. `\:`, `\"` and `\\` are resolved;
/// other escapes such as legend justification (`\l`, `\n`) are kept verbatim.
fn split_fields(token: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = token.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next @ (':' | '"' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            ':' => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn option_value<'a>(token: &'a str, option: &str) -> Option<&'a str> {
    token
        .strip_prefix(option)
        .and_then(|rest| rest.strip_prefix('='))
}

/// rrdtool legend justification and spacing escapes
const LEGEND_ESCAPES: [&str; 7] = ["\\n", "\\l", "\\r", "\\c", "\\j", "\\g", "\\s"];

fn legend(field: Option<&String>) -> Option<&str> {
    field
        .map(|l| {
            LEGEND_ESCAPES
                .iter()
                .find_map(|escape| l.strip_suffix(escape))
                .unwrap_or(l)
                .trim()
        })
        .filter(|l| !l.is_empty())
}

struct ModelBuilder<'a> {
    template: &'a str,
    resource_id: &'a str,
    model: NormalizedModel,
    printed: Vec<String>,
}

impl<'a> ModelBuilder<'a> {
    fn new(template: &'a str, resource_id: &'a str) -> Self {
        Self {
            template,
            resource_id,
            model: NormalizedModel::default(),
            printed: Vec::new(),
        }
    }

    fn invalid(&self, token: &str) -> MigrationError {
        MigrationError::InvalidGraphCommand {
            template: self.template.to_string(),
            token: token.to_string(),
        }
    }

    fn apply(&mut self, token: &str) -> Result<(), MigrationError> {
        if let Some(title) = option_value(token, "--title") {
            self.model.title = Some(title.to_string());
            return Ok(());
        }
        if let Some(label) = option_value(token, "--vertical-label") {
            self.model.vertical_label = Some(label.to_string());
            return Ok(());
        }

        let fields = split_fields(token);
        match fields[0].as_str() {
            "DEF" => self.def(token, &fields),
            "CDEF" => self.cdef(token, &fields),
            "AREA" => self.series(token, &fields, SeriesType::Area),
            "LINE" | "LINE1" | "LINE2" | "LINE3" => self.series(token, &fields, SeriesType::Line),
            "STACK" => self.series(token, &fields, SeriesType::Stack),
            "GPRINT" => {
                if let Some(metric) = fields.get(1) {
                    if !self.printed.contains(metric) {
                        self.printed.push(metric.clone());
                    }
                }
                Ok(())
            }
            // VDEF, COMMENT, rules, PRINT and rrdtool options draw no series
            _ => Ok(()),
        }
    }

    /// `DEF:<name>={rrdN}:<datasource>:<aggregation>`
    fn def(&mut self, token: &str, fields: &[String]) -> Result<(), MigrationError> {
        let [_, definition, datasource, aggregation, ..] = fields else {
            return Err(self.invalid(token));
        };
        let (name, _) = definition.split_once('=').ok_or_else(|| self.invalid(token))?;

        self.model.metrics.push(Metric::Attribute(AttributeMetric {
            name: name.to_string(),
            resource_id: self.resource_id.to_string(),
            attribute: datasource.clone(),
            datasource: datasource.clone(),
            aggregation: aggregation.clone(),
            transient: false,
        }));
        Ok(())
    }

    /// `CDEF:<name>=<rpn>`
    fn cdef(&mut self, token: &str, fields: &[String]) -> Result<(), MigrationError> {
        let definition = fields.get(1).ok_or_else(|| self.invalid(token))?;
        let (name, rpn) = definition.split_once('=').ok_or_else(|| self.invalid(token))?;

        let defined: Vec<&str> = self.model.metrics.iter().map(Metric::name).collect();
        let expression = rpn_to_infix(rpn, &defined).map_err(|e| MigrationError::InvalidRpn {
            metric: name.to_string(),
            expression: rpn.to_string(),
            reason: e.to_string(),
        })?;

        self.model.metrics.push(Metric::Expression(ExpressionMetric {
            name: name.to_string(),
            expression,
            transient: false,
        }));
        Ok(())
    }

    /// `AREA|LINEn|STACK:<metric>[#color][:legend]`
    fn series(&mut self, token: &str, fields: &[String], series_type: SeriesType) -> Result<(), MigrationError> {
        let target = fields.get(1).ok_or_else(|| self.invalid(token))?;
        let (metric, color) = match target.split_once('#') {
            Some((metric, color)) => (metric, Some(format!("#{}", color))),
            None => (target.as_str(), None),
        };

        self.model.series.push(Series::new(
            metric,
            legend(fields.get(2)),
            series_type,
            color.as_deref(),
        ));
        Ok(())
    }

    fn finish(mut self) -> NormalizedModel {
        // Printed values stay queryable through a hidden series
        for metric in std::mem::take(&mut self.printed) {
            if self.model.metric(&metric).is_some() && !self.model.is_plotted(&metric) {
                self.model.series.push(Series::hidden(&metric));
            }
        }

        let plotted: Vec<bool> = self
            .model
            .metrics
            .iter()
            .map(|m| self.model.is_plotted(m.name()))
            .collect();
        for (metric, plotted) in self.model.metrics.iter_mut().zip(plotted) {
            metric.set_transient(!plotted);
        }

        self.model
    }
}

impl ModelConverter for RrdGraphConverter {
    fn convert(&self, template: &GraphTemplate, resource_id: &str) -> Result<NormalizedModel, MigrationError> {
        let mut builder = ModelBuilder::new(&template.name, resource_id);
        builder.model.title = template.title.clone();

        if let Some(command) = &template.command {
            for token in tokenize(command) {
                builder.apply(&token)?;
            }
        }

        Ok(builder.finish())
    }
}
