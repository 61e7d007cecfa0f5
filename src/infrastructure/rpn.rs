// rrdtool RPN to Helm infix expression conversion
use thiserror::Error;

/// Placeholder OpenNMS substitutes with the step size in milliseconds.
const DIFF_TIME_PLACEHOLDER: &str = "{diffTime}";
const DIFF_TIME_SECONDS: &str = "(__diff_time / 1000)";

#[derive(Debug, Error, PartialEq)]
pub enum RpnError {
    #[error("operator {0} is missing operands")]
    MissingOperands(String),
    #[error("expression leaves {0} values on the stack")]
    UnbalancedStack(usize),
    #[error("operator {0} is not supported")]
    UnsupportedOperator(String),
    #[error("{0} is not a defined metric")]
    UnknownVariable(String),
    #[error("empty expression")]
    Empty,
}

fn pop(stack: &mut Vec<String>, token: &str) -> Result<String, RpnError> {
    stack
        .pop()
        .ok_or_else(|| RpnError::MissingOperands(token.to_string()))
}

fn pop2(stack: &mut Vec<String>, token: &str) -> Result<(String, String), RpnError> {
    let b = pop(stack, token)?;
    let a = pop(stack, token)?;
    Ok((a, b))
}

fn comparison(token: &str) -> Option<&'static str> {
    match token {
        "LT" => Some("<"),
        "LE" => Some("<="),
        "GT" => Some(">"),
        "GE" => Some(">="),
        "EQ" => Some("=="),
        "NE" => Some("!="),
        _ => None,
    }
}

/// Resolve an operand: a number, a `{property}` placeholder or a defined metric.
fn operand(token: &str, variables: &[&str]) -> Result<String, RpnError> {
    if token.parse::<f64>().is_ok() || variables.contains(&token) {
        return Ok(token.to_string());
    }
    if let Some(property) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        return Ok(property.to_string());
    }
    if token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && token.starts_with(|c: char| c.is_ascii_uppercase())
    {
        return Err(RpnError::UnsupportedOperator(token.to_string()));
    }
    Err(RpnError::UnknownVariable(token.to_string()))
}

/// Convert a comma separated RPN expression, e.g. `octIn,8,*`, into `(octIn * 8)`.
/// `variables` are the metric names the expression may reference.
pub fn rpn_to_infix(rpn: &str, variables: &[&str]) -> Result<String, RpnError> {
    let mut stack: Vec<String> = Vec::new();

    for token in rpn.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let value = match token {
            "+" | "-" | "*" | "/" | "%" => {
                let (a, b) = pop2(&mut stack, token)?;
                format!("({} {} {})", a, token, b)
            }
            "UN" => {
                let a = pop(&mut stack, token)?;
                format!("( ({} == NaN) ? 1 : 0)", a)
            }
            "IF" => {
                let c = pop(&mut stack, token)?;
                let (a, b) = pop2(&mut stack, token)?;
                format!("({} != 0 ? {} : {})", a, b, c)
            }
            "MIN" | "MAX" => {
                let (a, b) = pop2(&mut stack, token)?;
                format!("math:{}({}, {})", token.to_lowercase(), a, b)
            }
            "ABS" => {
                let a = pop(&mut stack, token)?;
                format!("math:abs({})", a)
            }
            "ADDNAN" => {
                let (a, b) = pop2(&mut stack, token)?;
                format!(
                    "(({a} == NaN) ? {b} : (({b} == NaN) ? {a} : ({a} + {b})))",
                    a = a,
                    b = b
                )
            }
            "UNKN" => "NaN".to_string(),
            "INF" => "__inf".to_string(),
            "NEGINF" => "__neg_inf".to_string(),
            DIFF_TIME_PLACEHOLDER => DIFF_TIME_SECONDS.to_string(),
            _ => match comparison(token) {
                Some(op) => {
                    let (a, b) = pop2(&mut stack, token)?;
                    format!("({} {} {} ? 1 : 0)", a, op, b)
                }
                // Numbers, {property} placeholders and metric names
                None => operand(token, variables)?,
            },
        };
        stack.push(value);
    }

    match stack.len() {
        0 => Err(RpnError::Empty),
        1 => Ok(stack.remove(0)),
        n => Err(RpnError::UnbalancedStack(n)),
    }
}
