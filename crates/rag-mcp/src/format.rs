//! Text formatting for search responses.

use rag_core::Document;

/// Render search results as the single text block returned to the client.
pub fn format_results(query: &str, results: &[Document]) -> String {
    if results.is_empty() {
        return format!("No results found for query: '{}'", query);
    }

    let mut output = format!("Found {} result(s) for '{}':\n\n", results.len(), query);
    for (i, doc) in results.iter().enumerate() {
        output.push_str(&format!("Result {}:\n", i + 1));
        output.push_str(&format!("Title: {}\n", doc.title));
        output.push_str(&format!("Content: {}\n\n", doc.content));
    }
    output
}
