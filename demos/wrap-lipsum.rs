use rag_wrap::{wrap_lines, wrap_text};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=rag_wrap=trace to watch the line breaker
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = lipsum::lipsum(60);
    for width in [20, 40, 60] {
        let wrapped = wrap_text(&text, width);
        println!("{}", "-".repeat(wrapped.limit));
        for line in wrapped.lines {
            println!("{}", line.trim_end());
        }
        println!();
    }

    // ideographs wrap without spaces, and explicit line breaks are kept
    let mixed = "日本語と English が混在する文章。\n第二段落 second paragraph";
    let wrapped = wrap_lines(mixed, 12);
    println!("{}", "-".repeat(wrapped.limit));
    for line in wrapped.lines {
        println!("{}", line.trim_end());
    }
}
