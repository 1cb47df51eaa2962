use tower_lsp::lsp_types::{
    ParameterInformation, ParameterLabel, Position, SignatureHelp, SignatureInformation,
};

use logicaffeine_language::token::TokenType;

use crate::document::DocumentState;
use crate::index::DefinitionKind;

/// Handle signature help request.
///
/// When the cursor is inside a `Call` expression, find the function definition
/// and show parameter names/types.
pub fn signature_help(doc: &DocumentState, position: Position) -> Option<SignatureHelp> {
    let offset = doc.line_index.offset(position);

    // Scan backwards from cursor to find a Call token
    let call_token = doc.tokens.iter().rev().find(|t| {
        t.span.end <= offset && matches!(t.kind, TokenType::Call)
    })?;

    // Find the function name token (should be right after Call or after "with")
    let call_idx = doc.tokens.iter().position(|t| {
        t.span == call_token.span && t.kind == call_token.kind
    })?;

    // The function name should follow Call
    let func_name_token = doc.tokens.get(call_idx + 1)?;
    let func_name = doc.source.get(func_name_token.span.start..func_name_token.span.end)?;

    // Look up the function definition
    let defs = doc.symbol_index.definitions_of(func_name);
    let func_def = defs.iter().find(|d| d.kind == DefinitionKind::Function)?;

    // Extract detail string to build signature
    let detail = func_def.detail.as_ref()?;

    // Count parameter separators after Call to determine active parameter.
    // "with" introduces the parameter list, only "and" and "," separate params.
    let active_param = doc.tokens[call_idx..]
        .iter()
        .take_while(|t| t.span.start < offset)
        .filter(|t| {
            matches!(t.kind, TokenType::Comma)
                || doc
                    .source
                    .get(t.span.start..t.span.end)
                    .map(|s| s == "and")
                    .unwrap_or(false)
        })
        .count();

    // Extract parameters from the function's signature detail string
    let params: Vec<ParameterInformation> = extract_params_from_signature(detail)
        .into_iter()
        .map(|(name, ty)| ParameterInformation {
            label: ParameterLabel::Simple(name.clone()),
            documentation: Some(tower_lsp::lsp_types::Documentation::String(
                format!("{}: {}", name, ty),
            )),
        })
        .collect();

    Some(SignatureHelp {
        signatures: vec![SignatureInformation {
            label: detail.clone(),
            documentation: None,
            parameters: if params.is_empty() {
                None
            } else {
                Some(params)
            },
            active_parameter: Some(active_param as u32),
        }],
        active_signature: Some(0),
        active_parameter: Some(active_param as u32),
    })
}

/// Extract parameter names and types from a function signature detail string.
///
/// Expects format: `"To name(param1: Type1, param2: Type2) -> ReturnType"`
/// Returns a list of `(param_name, param_type)` pairs.
fn extract_params_from_signature(detail: &str) -> Vec<(String, String)> {
    let open = match detail.find('(') {
        Some(i) => i,
        None => return vec![],
    };
    let close = match detail.find(')') {
        Some(i) => i,
        None => return vec![],
    };
    if close <= open + 1 {
        return vec![];
    }
    let params_str = &detail[open + 1..close];
    params_str
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            let mut split = part.splitn(2, ':');
            let name = split.next()?.trim().to_string();
            let ty = split.next().map(|s| s.trim().to_string()).unwrap_or_else(|| "auto".to_string());
            Some((name, ty))
        })
        .collect()
}
