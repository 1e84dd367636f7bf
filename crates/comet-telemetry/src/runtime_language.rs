/// Runtime identification derived from a buffer's language id, used for
/// analytics segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeLanguageContext {
    pub runtime: &'static str,
    pub runtime_source: &'static str,
}

/// Resolve the runtime name/version pair for a language id.
///
/// The table is static; a miss is not an error, the caller reports empty
/// runtime fields for languages we have no segmentation for.
pub fn runtime_language(language: &str) -> Option<RuntimeLanguageContext> {
    let (runtime, runtime_source) = match language {
        "python" => ("python2", "2.7.16"),
        "java" => ("java8", "1.8.272"),
        "javascript" => ("javascript", "nodejs-12.x"),
        _ => return None,
    };
    Some(RuntimeLanguageContext {
        runtime,
        runtime_source,
    })
}
