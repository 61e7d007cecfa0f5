// Shared fixtures for unit tests
use crate::application::model_converter::ModelConverter;
use crate::domain::datasource::{DataSource, PERFORMANCE_DATASOURCE_TYPE};
use crate::domain::graph_model::{
    AttributeMetric, ExpressionMetric, GraphTemplate, Metric, NormalizedModel, Series, SeriesType,
};
use crate::error::MigrationError;

pub const OFFICE_GATEWAY_RESOURCE: &str = "node[Office:default-gateway].interfaceSnmp[vlan_0-a8d0e5a0a490]";

pub const MIB2_HCBITS_COMMAND: &str = r#"--title="Bits In/Out (High Speed)" --vertical-label="Bits per second" --units=si DEF:octIn={rrd1}:ifHCInOctets:AVERAGE DEF:octOut={rrd2}:ifHCOutOctets:AVERAGE CDEF:rawbitsIn=octIn,8,* CDEF:rawbitsOut=octOut,8,* CDEF:rawbitsOutNeg=0,rawbitsOut,- CDEF:bytesIn=octIn,UN,0,octIn,IF CDEF:bytesOut=octOut,UN,0,octOut,IF CDEF:outSum=bytesOut,{diffTime},* CDEF:inSum=bytesIn,{diffTime},* CDEF:totSum=outSum,inSum,+ AREA:rawbitsIn#73d216 LINE1:rawbitsIn#4e9a06:"In " GPRINT:rawbitsIn:AVERAGE:"Avg  \: %8.2lf %s" GPRINT:rawbitsIn:MIN:"Min  \: %8.2lf %s" GPRINT:rawbitsIn:MAX:"Max  \: %8.2lf %s\n" AREA:rawbitsOutNeg#729fcf LINE1:rawbitsOutNeg#3465a4:"Out" GPRINT:rawbitsOut:AVERAGE:"Avg  \: %8.2lf %s" GPRINT:rawbitsOut:MIN:"Min  \: %8.2lf %s" GPRINT:rawbitsOut:MAX:"Max  \: %8.2lf %s\n" GPRINT:inSum:AVERAGE:"  Tot In  \: %8.2lf %s" GPRINT:outSum:AVERAGE:" Tot Out  \: %8.2lf %s" GPRINT:totSum:AVERAGE:" Tot  \: %8.2lf %s\n""#;

pub fn mib2_hcbits_template() -> GraphTemplate {
    GraphTemplate {
        name: "mib2.HCbits".to_string(),
        title: Some("Bits In/Out (High Speed)".to_string()),
        columns: vec!["ifHCInOctets".to_string(), "ifHCOutOctets".to_string()],
        types: vec!["interfaceSnmp".to_string()],
        suppress: vec!["mib2.bits".to_string()],
        command: Some(MIB2_HCBITS_COMMAND.to_string()),
    }
}

fn attribute(name: &str, attribute: &str, resource_id: &str) -> Metric {
    Metric::Attribute(AttributeMetric {
        name: name.to_string(),
        resource_id: resource_id.to_string(),
        attribute: attribute.to_string(),
        datasource: attribute.to_string(),
        aggregation: "AVERAGE".to_string(),
        transient: true,
    })
}

fn expression(name: &str, expression: &str, transient: bool) -> Metric {
    Metric::Expression(ExpressionMetric {
        name: name.to_string(),
        expression: expression.to_string(),
        transient,
    })
}

/// Model of `mib2.HCbits` for one interface resource.
pub fn mib2_hcbits_model(resource_id: &str) -> NormalizedModel {
    NormalizedModel {
        title: Some("Bits In/Out (High Speed)".to_string()),
        vertical_label: Some("Bits per second".to_string()),
        metrics: vec![
            attribute("octIn", "ifHCInOctets", resource_id),
            attribute("octOut", "ifHCOutOctets", resource_id),
            expression("rawbitsIn", "(octIn * 8)", false),
            expression("rawbitsOut", "(octOut * 8)", false),
            expression("rawbitsOutNeg", "(0 - rawbitsOut)", false),
            expression("bytesIn", "(( (octIn == NaN) ? 1 : 0) != 0 ? 0 : octIn)", true),
            expression("bytesOut", "(( (octOut == NaN) ? 1 : 0) != 0 ? 0 : octOut)", true),
            expression("outSum", "(bytesOut * (__diff_time / 1000))", false),
            expression("inSum", "(bytesIn * (__diff_time / 1000))", false),
            expression("totSum", "(outSum + inSum)", false),
        ],
        series: vec![
            Series::new("rawbitsIn", None, SeriesType::Area, Some("#73d216")),
            Series::new("rawbitsIn", Some("In"), SeriesType::Line, Some("#4e9a06")),
            Series::new("rawbitsOutNeg", None, SeriesType::Area, Some("#729fcf")),
            Series::new("rawbitsOutNeg", Some("Out"), SeriesType::Line, Some("#3465a4")),
            Series::hidden("rawbitsOut"),
            Series::hidden("inSum"),
            Series::hidden("outSum"),
            Series::hidden("totSum"),
        ],
    }
}

pub fn performance_datasource() -> DataSource {
    DataSource::new("ONMS Performance", PERFORMANCE_DATASOURCE_TYPE)
}

/// Converter returning the `mib2.HCbits` model for any template.
pub struct FixedModelConverter;

impl ModelConverter for FixedModelConverter {
    fn convert(&self, _template: &GraphTemplate, resource_id: &str) -> Result<NormalizedModel, MigrationError> {
        Ok(mib2_hcbits_model(resource_id))
    }
}
