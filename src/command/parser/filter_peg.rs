use crate::engine::core::filter::{AndGroup, Expression, Predicate};
use crate::engine::core::read::aggregate::plan::AggregateRequest;
use crate::command::parser::error::ParseError;

peg::parser! {
    grammar filter_dsl() for str {

        // ==========
        // HELPERS
        // ==========

        rule _() = quiet!{ [' ' | '\t' | '\n' | '\r']* }

        // Case-insensitive keyword matcher
        rule ci(s: &'static str)
            = kw:$(['a'..='z' | 'A'..='Z']+) {? if eq_ci(kw, s) { Ok(()) } else { Err("expected keyword") } }

        // ==========
        // ENTRY POINT
        // ==========

        pub rule expression() -> Expression
            = _ groups:(and_group() ++ (_ ci("OR") _)) _ { Expression::new(groups) }
            / _ { Expression::default() }

        // ==========
        // EXPRESSIONS
        // ==========

        rule and_group() -> AndGroup
            = "*" { AndGroup::default() }
            / ps:(predicate() ++ (_ ci("AND") _)) { AndGroup(ps) }

        rule predicate() -> Predicate
            = c:ident() _ "=" _ v:value() { Predicate::new(c, v) }

        // ==========
        // TERMINALS
        // ==========

        rule value() -> String
            = s:string_literal() { s.to_string() }
            / v:bare_value() { v.to_string() }

        rule ident() -> &'input str
            = quiet!{
                $( ['a'..='z' | 'A'..='Z' | '_']
                   ['a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-']* )
            }
            / expected!("identifier")

        rule string_literal() -> &'input str
            = "\"" chars:$((!"\"" [_])*) "\"" { chars }

        // Unquoted values: identifiers, numbers and codes such as `1A` or `-0.5`
        rule bare_value() -> &'input str
            = quiet!{ $(['0'..='9' | 'a'..='z' | 'A'..='Z' | '_' | '-' | '.']+) }
            / expected!("value")
    }
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Parses `D1=A AND D2=X OR D2=Y` into DNF.
///
/// `AND` binds tighter than `OR`, so the grammar yields AND-groups directly.
/// `*` is a group with no predicates (matches every row); blank input is the
/// empty expression (matches nothing).
pub fn parse_filter(input: &str) -> Result<Expression, ParseError> {
    filter_dsl::expression(input).map_err(|e| ParseError::InvalidFilter(e.to_string()))
}

/// Parses `func:column` aggregate specs, e.g. `avg:Fact1`.
pub fn parse_aggregates<S: AsRef<str>>(specs: &[S]) -> Result<Vec<AggregateRequest>, ParseError> {
    specs
        .iter()
        .map(|s| s.as_ref().parse::<AggregateRequest>().map_err(ParseError::from))
        .collect()
}
