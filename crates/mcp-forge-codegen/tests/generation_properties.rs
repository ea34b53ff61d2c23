//! Behavioural properties of generated server source.
//!
//! Covers:
//! - Deterministic output
//! - Parameter-name agreement between signature, schema, and model
//! - Zero-tool and zero-parameter generation
//! - Enum type overrides
//! - Constraint rendering order on a known fixture
//! - The weather-forecast end-to-end scenario
//! - Line-terminator safety for validated but hostile input

use mcp_forge_codegen::identifier::normalize_identifier;
use mcp_forge_codegen::{ValidationLimits, emit_server, validate_server_config};
use mcp_forge_core::{
    Constraints, DefaultValue, GeneratorConfig, ParamType, Parameter, ServerConfig,
    TargetLanguage, Tool,
};
use regex::Regex;

const LANGUAGES: [TargetLanguage; 2] = [TargetLanguage::Python, TargetLanguage::TypeScript];

fn server(language: TargetLanguage, tools: Vec<Tool>) -> ServerConfig {
    ServerConfig {
        server_name: "Property Server".to_string(),
        description: "Used by property tests".to_string(),
        server_type: language,
        tools,
    }
}

fn emit(config: &ServerConfig) -> String {
    emit_server(config, &GeneratorConfig::default())
}

/// Returns the positions of `needles` in `haystack`, asserting each exists.
fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
        })
        .collect()
}

fn assert_in_order(haystack: &str, needles: &[&str]) {
    let found = positions(haystack, needles);
    assert!(
        found.windows(2).all(|pair| pair[0] < pair[1]),
        "{needles:?} out of order in:\n{haystack}"
    );
}

fn mixed_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "Search Orders",
            "Finds orders",
            vec![
                Parameter::new("Customer Email", ParamType::Email, "Who ordered"),
                Parameter::new("status", ParamType::Enum, "Order status").with_constraints(
                    Constraints {
                        enum_values: Some(vec!["open".to_string(), "closed".to_string()]),
                        ..Default::default()
                    },
                ),
                Parameter::new("Max  Results", ParamType::Integer, "Cap").with_constraints(
                    Constraints {
                        minimum: Some(1.0),
                        maximum: Some(50.0),
                        default: Some(DefaultValue::Number(10.into())),
                        ..Default::default()
                    },
                ),
                Parameter::new("since", ParamType::Date, "Earliest date"),
                Parameter::new("tags", ParamType::Array, "Tags"),
            ],
        ),
        Tool::new("ping", "Health check", vec![]),
    ]
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_emission_is_deterministic() {
    for language in LANGUAGES {
        let config = server(language, mixed_tools());
        assert_eq!(emit(&config), emit(&config));
    }
}

// ============================================================================
// Name consistency
// ============================================================================

/// Splits a bare-name list such as `a, b, c`.
fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Extracts the names of a typed list such as `a: str, b: Literal["x", "y"]`.
fn typed_names(list: &str) -> Vec<String> {
    let name = Regex::new(r"(?:^|, )([\p{L}_][\p{L}\p{N}_]*): ").unwrap();
    name.captures_iter(list).map(|c| c[1].to_string()).collect()
}

fn block_keys(source: &str, opening: &str, indent: &str) -> Vec<String> {
    let start = source.find(opening).unwrap_or_else(|| panic!("missing {opening}"));
    let key = Regex::new(&format!(r"^{indent}([\p{{L}}_][\p{{L}}\p{{N}}_]*)[:=] ?")).unwrap();
    source[start + opening.len()..]
        .lines()
        .skip(1)
        .take_while(|line| line.starts_with(indent) || line.is_empty())
        .filter_map(|line| key.captures(line).map(|c| c[1].to_string()))
        .collect()
}

#[test]
fn test_python_names_agree() {
    let source = emit(&server(TargetLanguage::Python, mixed_tools()));
    let expected: Vec<String> = ["customer_email", "status", "max_results", "since", "tags"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let signature = Regex::new(r"async def search_orders\((.*)\) ->").unwrap();
    let signature = &signature.captures(&source).unwrap()[1];
    assert_eq!(typed_names(signature), expected);

    let model_fields: Vec<String> = source
        .lines()
        .skip_while(|line| !line.starts_with("class search_orders_params(BaseModel):"))
        .skip(1)
        .take_while(|line| !line.trim().is_empty())
        .map(|line| line.trim().split(':').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(model_fields, expected);

    let assignments = block_keys(&source, "params = search_orders_params(", "        ");
    assert_eq!(assignments, expected);
}

#[test]
fn test_typescript_names_agree() {
    let source = emit(&server(TargetLanguage::TypeScript, mixed_tools()));
    let expected: Vec<String> = ["customer_email", "status", "max_results", "since", "tags"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let handler = Regex::new(r"handler: async \(\{ (.*) \}\) =>").unwrap();
    assert_eq!(split_names(&handler.captures(&source).unwrap()[1]), expected);

    let parse = Regex::new(r"search_orders_schema\.parse\(\{ (.*) \}\)").unwrap();
    assert_eq!(split_names(&parse.captures(&source).unwrap()[1]), expected);

    assert_eq!(
        block_keys(&source, "const search_orders_schema = z.object({", "  "),
        expected
    );
    assert_eq!(block_keys(&source, "parameters: {", "    "), expected);
}

#[test]
fn test_names_are_normalized_in_both_languages() {
    for language in LANGUAGES {
        let source = emit(&server(language, mixed_tools()));
        assert!(source.contains("search_orders"));
        assert!(!source.contains("Search Orders"));
        assert!(source.contains("max_results"));
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in ["Max  Results", "  padded\tname ", "ALL CAPS", "mixed_Case Name", "", "é t é"] {
        let once = normalize_identifier(raw);
        assert_eq!(normalize_identifier(&once), once, "not idempotent for {raw:?}");
    }
}

// ============================================================================
// Zero tools / zero parameters
// ============================================================================

#[test]
fn test_zero_tools_python() {
    let source = emit(&server(TargetLanguage::Python, vec![]));
    assert!(source.contains("server = MCPServer("));
    assert!(source.contains("if __name__ == \"__main__\":\n    server.start()"));
    assert!(!source.contains("@server.tool()"));
    assert!(!source.contains("BaseModel):"));
}

#[test]
fn test_zero_tools_typescript() {
    let source = emit(&server(TargetLanguage::TypeScript, vec![]));
    assert!(source.contains("const server = new MCPServer({"));
    assert!(source.contains("server.start().catch((error) => {"));
    assert!(source.contains("process.on(\"SIGINT\""));
    assert!(!source.contains("server.tool({"));
    assert!(!source.contains("z.object("));
}

#[test]
fn test_zero_parameter_tool_python() {
    let source = emit(&server(TargetLanguage::Python, mixed_tools()));
    assert!(source.contains("async def ping() -> Dict[str, Any]:"));
    assert!(!source.contains("class ping_params"));
    assert!(source.contains("\"ping executed with no parameters\""));
}

#[test]
fn test_zero_parameter_tool_typescript() {
    let source = emit(&server(TargetLanguage::TypeScript, mixed_tools()));
    assert!(!source.contains("ping_schema"));
    let ping = &source[source.find("name: \"ping\"").unwrap()..];
    assert!(ping.contains("parameters: {},\n  handler: async () => {"));
}

// ============================================================================
// Enum override
// ============================================================================

#[test]
fn test_enum_override_python() {
    let source = emit(&server(TargetLanguage::Python, mixed_tools()));
    assert!(source.contains(r#"status: Literal["open", "closed"] = Field("#));
    assert!(source.contains(r#"status: Literal["open", "closed"], "#));
}

#[test]
fn test_enum_override_typescript() {
    let source = emit(&server(TargetLanguage::TypeScript, mixed_tools()));
    assert!(source.contains(r#"status: z.enum(["open", "closed"]),"#));
    assert!(!source.contains("status: z.string()"));
    assert!(source.contains(r#"@param {"open" | "closed"} status"#));
}

// ============================================================================
// Constraint fixture
// ============================================================================

fn fixture_tool() -> Tool {
    Tool::new(
        "check_code",
        "Checks a code",
        vec![
            Parameter::new("code", ParamType::String, "Lowercase code").with_constraints(
                Constraints {
                    min_length: Some(3),
                    max_length: Some(10),
                    pattern: Some("^[a-z]+$".to_string()),
                    default: Some(DefaultValue::String("abc".to_string())),
                    ..Default::default()
                },
            ),
        ],
    )
}

#[test]
fn test_fixture_python_order() {
    let source = emit(&server(TargetLanguage::Python, vec![fixture_tool()]));
    assert_in_order(
        &source,
        &["min_length=3", "max_length=10", r#"regex="^[a-z]+$""#, r#"default="abc""#],
    );
}

#[test]
fn test_fixture_typescript_order() {
    let source = emit(&server(TargetLanguage::TypeScript, vec![fixture_tool()]));
    assert_in_order(
        &source,
        &[".min(3)", ".max(10)", ".regex(/^[a-z]+$/)", r#".default("abc")"#],
    );
}

#[test]
fn test_email_format_layered_on_string() {
    let source = emit(&server(TargetLanguage::TypeScript, mixed_tools()));
    assert!(source.contains("customer_email: z.string().email(),"));
    assert!(source.contains("max_results: z.number().int().gte(1).lte(50).default(10),"));
    assert!(source.contains("since: z.coerce.date(),"));
}

#[test]
fn test_no_empty_validator_calls() {
    for language in LANGUAGES {
        let source = emit(&server(language, mixed_tools()));
        for empty in [".min()", ".max()", ".regex(//)", "default=,", "Field(description=\"\", )"] {
            assert!(!source.contains(empty), "found {empty} in {language} output");
        }
    }
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_weather_forecast_python() {
    let config = ServerConfig {
        server_name: "Weather Data Provider".to_string(),
        description: "Provides weather forecasts".to_string(),
        server_type: TargetLanguage::Python,
        tools: vec![Tool::new(
            "get_weather_forecast",
            "Retrieves weather forecast data for a specific location",
            vec![
                Parameter::new("location", ParamType::String, "City name or zip code"),
                Parameter::new("days", ParamType::Number, "Number of days to forecast"),
            ],
        )],
    };

    let source = emit(&config);
    assert!(source.contains("name=\"Weather Data Provider\","));
    assert!(source.contains(
        "async def get_weather_forecast(location: str, days: float) -> Dict[str, Any]:"
    ));
    assert!(source.contains("class get_weather_forecast_params(BaseModel):"));
    assert!(source.contains("    location: str = Field(description=\"City name or zip code\")"));
    assert!(source.contains("    days: float = Field(description=\"Number of days to forecast\")"));
    assert!(source.contains(
        "return {\"result\": f\"get_weather_forecast executed with parameters: {location}, {days}\"}"
    ));
}

#[test]
fn test_hostile_text_is_escaped() {
    let config = ServerConfig {
        server_name: "Quote \"Server\"".to_string(),
        description: "Line one\nLine two".to_string(),
        server_type: TargetLanguage::TypeScript,
        tools: vec![Tool::new(
            "echo",
            "Ends a comment */ early and uses `backticks`",
            vec![Parameter::new("url", ParamType::Url, "Path /a/b").with_constraints(
                Constraints {
                    pattern: Some("^https?://".to_string()),
                    ..Default::default()
                },
            )],
        )],
    };

    let source = emit(&config);
    assert!(source.contains(r#"name: "Quote \"Server\"","#));
    assert!(source.contains("// Line one\n// Line two"));
    assert!(source.contains(r" * Ends a comment *\/ early"));
    assert!(source.contains(r".regex(/^https?:\/\//).url()"));
}

/// Header comment lines: everything before the first blank line.
fn header_lines(source: &str) -> Vec<&str> {
    source.split('\n').take_while(|line| !line.is_empty()).collect()
}

fn comment_marker(language: TargetLanguage) -> &'static str {
    match language {
        TargetLanguage::Python => "#",
        TargetLanguage::TypeScript => "//",
    }
}

#[test]
fn test_carriage_return_and_line_separator_stay_in_header() {
    for language in LANGUAGES {
        let mut config = server(language, vec![Tool::new("ping", "Ping", vec![])]);
        config.description = "Weather\rfeed data\u{2028}more text".to_string();

        let source = emit(&config);
        let marker = comment_marker(language);
        let header = header_lines(&source);
        assert_eq!(
            &header[2..5],
            [
                format!("{marker} Weather"),
                format!("{marker} feed data"),
                format!("{marker} more text"),
            ]
        );
        assert!(source.contains(r#""Weather\rfeed data\u2028more text""#), "{source}");
    }
}

fn hostile_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "Größe prüfen",
            "Checks\rsizes\u{2028}fast \"\"\" end\u{85}",
            vec![
                Parameter::new("città", ParamType::String, "Città\u{2029}name").with_constraints(
                    Constraints {
                        pattern: Some("^a\u{2028}b$".to_string()),
                        default: Some(DefaultValue::String("a\r\nb".to_string())),
                        ..Default::default()
                    },
                ),
                Parameter::new("Stadt Name", ParamType::Enum, "Stadt").with_constraints(
                    Constraints {
                        enum_values: Some(vec![
                            "Zürich".to_string(),
                            "São\u{2029}Paulo".to_string(),
                        ]),
                        default: Some(DefaultValue::String("Zürich".to_string())),
                        ..Default::default()
                    },
                ),
                Parameter::new("since", ParamType::Date, "From\r").with_constraints(
                    Constraints {
                        default: Some(DefaultValue::String("2024-01-01".to_string())),
                        ..Default::default()
                    },
                ),
                Parameter::new("Max Größe", ParamType::Integer, "Cap").with_constraints(
                    Constraints {
                        minimum: Some(1.0),
                        maximum: Some(10.0),
                        default: Some(DefaultValue::Number(3.into())),
                        ..Default::default()
                    },
                ),
            ],
        ),
        Tool::new("x", "Plain", vec![]),
    ]
}

#[test]
fn test_generated_source_is_structurally_valid() {
    for language in LANGUAGES {
        let config = ServerConfig {
            server_name: "Weather\r\nHub\u{2028}Prime\u{0}".to_string(),
            description: "Weather\rfeed data\u{2028}more text\u{2029}end".to_string(),
            server_type: language,
            tools: hostile_tools(),
        };
        validate_server_config(&config, &ValidationLimits::default()).unwrap();

        let source = emit(&config);
        for terminator in ['\r', '\u{85}', '\u{2028}', '\u{2029}'] {
            assert!(!source.contains(terminator), "{terminator:?} leaked into:\n{source}");
        }

        let marker = comment_marker(language);
        let header = header_lines(&source);
        assert!(header.len() >= 7, "{header:?}");
        for line in &header {
            assert!(line.starts_with(marker), "{line:?} is not a comment");
        }

        match language {
            TargetLanguage::Python => {
                assert!(source.contains("class größe_prüfen_params(BaseModel):"));
                assert!(source.contains("async def größe_prüfen("));
            }
            TargetLanguage::TypeScript => {
                assert!(source.contains("const größe_prüfen_schema = z.object({"));
                assert!(source.contains(r#"z.coerce.date().default(new Date("2024-01-01"))"#));
                assert!(source.contains(r"regex(/^a\u2028b$/)"));
            }
        }
    }
}
