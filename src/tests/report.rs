use crate::{
    AnalysisResult, Analyzer, DocumentStatistics, DocumentType, EntityBundle, ReportConfig,
    ReportGenerator, WordCount,
};

fn render(text: &str) -> String {
    ReportGenerator::default().render(&Analyzer::default().analyze_str(text))
}

fn result_with(entities: EntityBundle) -> AnalysisResult {
    AnalysisResult {
        statistics: DocumentStatistics::new(12, 2, 1),
        document_type: DocumentType::Contract,
        entities,
        common_words: vec![WordCount {
            word: "party".to_string(),
            count: 3,
        }],
    }
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("{} {}", prefix, n)).collect()
}

#[test]
fn short_agreement() {
    insta::assert_snapshot!(render(
        "THIS AGREEMENT made between Acme Corp, a Delaware corporation and Globex Inc., a Nevada corporation. This Agreement shall terminate on January 1, 2025. Acme Corp shall pay Globex Inc. $10,000.00."
    ), @r###"
    LEGAL DOCUMENT ANALYSIS REPORT
    ==============================
    Document Type: contract
    Word Count: 32
    Sentence Count: 4
    Paragraph Count: 1
    Average Words Per Sentence: 8.0

    LEGAL ENTITIES
    --------------------
    Parties:
    - Acme Corp
    - Globex Inc.

    Key Dates:
    - January 1, 2025

    Monetary Amounts:
    - $10,000.00

    COMMON WORDS
    --------------------
    this: 2
    agreement: 2
    acme: 2
    corp: 2
    a: 2
    corporation: 2
    globex: 2
    inc: 2
    shall: 2
    made: 1
    between: 1
    delaware: 1
    and: 1
    nevada: 1
    terminate: 1
    on: 1
    january: 1
    1: 1
    2025: 1
    pay: 1
    "###);
}

#[test]
fn empty_text_renders_banner_type_and_stats_only() {
    assert_eq!(
        render(""),
        "LEGAL DOCUMENT ANALYSIS REPORT\n\
         ==============================\n\
         Document Type: unknown\n\
         Word Count: 0\n\
         Sentence Count: 0\n\
         Paragraph Count: 0\n\
         Average Words Per Sentence: 0.0"
    );
}

#[test]
fn words_without_entities_skip_entity_header() {
    insta::assert_snapshot!(render("Lorem ipsum lorem."), @r###"
    LEGAL DOCUMENT ANALYSIS REPORT
    ==============================
    Document Type: unknown
    Word Count: 3
    Sentence Count: 1
    Paragraph Count: 1
    Average Words Per Sentence: 3.0

    COMMON WORDS
    --------------------
    lorem: 2
    ipsum: 1
    "###);
}

#[test]
fn eleven_items_show_ten_and_overflow_line() {
    let report = ReportGenerator::default().render(&result_with(EntityBundle {
        dates: numbered("Date", 11),
        ..EntityBundle::default()
    }));

    assert!(report.contains("- Date 10\n"));
    assert!(!report.contains("- Date 11"));
    assert!(report.contains("\n  ... and 1 more\n"));
}

#[test]
fn exactly_ten_items_have_no_overflow_line() {
    let report = ReportGenerator::default().render(&result_with(EntityBundle {
        parties: numbered("Party", 10),
        ..EntityBundle::default()
    }));

    assert!(report.contains("- Party 10"));
    assert!(!report.contains("more"));
}

#[test]
fn long_definitions_are_truncated_in_report_only() {
    let definition = "a".repeat(60);
    let mut entities = EntityBundle::default();
    entities.defined_terms.insert("Term", definition.clone());
    entities.defined_terms.insert("Short", "exactly fifty characters long is not truncated....");

    let result = result_with(entities);
    let report = ReportGenerator::default().render(&result);

    assert!(report.contains(&format!("- Term: {}...\n", "a".repeat(50))));
    assert!(report.contains("- Short: exactly fifty characters long is not truncated....\n"));
    assert_eq!(result.entities.defined_terms.get("Term"), Some(definition.as_str()));
}

#[test]
fn defined_terms_overflow_says_terms() {
    let mut entities = EntityBundle::default();
    for n in 1..=12 {
        entities.defined_terms.insert(format!("Term {}", n), "meaning");
    }

    let report = ReportGenerator::default().render(&result_with(entities));
    assert!(report.contains("- Term 10: meaning\n  ... and 2 more terms\n"));
}

#[test]
fn section_order_and_spacing() {
    let mut entities = EntityBundle {
        parties: vec!["Acme Corp".to_string()],
        dates: vec!["2024-01-01".to_string()],
        monetary_amounts: vec!["$5".to_string()],
        ..EntityBundle::default()
    };
    entities.defined_terms.insert("Buyer", "Acme Corp");

    insta::assert_snapshot!(ReportGenerator::default().render(&result_with(entities)), @r###"
    LEGAL DOCUMENT ANALYSIS REPORT
    ==============================
    Document Type: contract
    Word Count: 12
    Sentence Count: 2
    Paragraph Count: 1
    Average Words Per Sentence: 6.0

    LEGAL ENTITIES
    --------------------
    Parties:
    - Acme Corp

    Key Dates:
    - 2024-01-01

    Monetary Amounts:
    - $5

    Defined Terms:
    - Buyer: Acme Corp

    COMMON WORDS
    --------------------
    party: 3
    "###);
}

#[test]
fn custom_limits() {
    let generator = ReportGenerator::new(ReportConfig {
        max_items: 2,
        definition_preview_chars: 4,
    });
    let mut entities = EntityBundle {
        parties: numbered("Party", 3),
        ..EntityBundle::default()
    };
    entities.defined_terms.insert("Term", "abcdefgh");

    let report = generator.render(&result_with(entities));
    assert!(report.contains("- Party 2\n  ... and 1 more\n"));
    assert!(report.contains("- Term: abcd...\n"));
}

#[test]
fn render_to_matches_render() {
    let result = Analyzer::default().analyze_str("PLAINTIFF: Jane Roe; filed May 1, 2024 in court.");
    let generator = ReportGenerator::default();

    let mut sink = String::new();
    generator.render_to(&result, &mut sink).unwrap();
    assert_eq!(sink, generator.render(&result));
}
