//! Horizon Accordion FAQ Example
//!
//! Drives a small FAQ accordion from the console:
//! - Uncontrolled selection with a collapsible single panel
//! - A controlled accordion whose owner applies every request
//! - Keyboard navigation that skips a disabled item
//!
//! Run with: RUST_LOG=horizon_accordion=debug cargo run -p horizon-accordion --example faq

use std::sync::Arc;

use horizon_accordion::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const QUESTIONS: [&str; 4] = [
    "How long does shipping take?",
    "Can I return an item?",
    "Do you ship internationally? (unavailable)",
    "How do I contact support?",
];

fn print_state(title: &str, items: &[AccordionItem]) -> horizon_accordion::Result<()> {
    println!("-- {title}");
    for (item, question) in items.iter().zip(QUESTIONS) {
        let marker = if item.is_expanded()? { "v" } else { ">" };
        println!("  {marker} {question}  [{}]", item.button().attributes()?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Uncontrolled: the accordion owns which panel is open.
    let config = AccordionConfig::from_toml_str(
        r#"
        id = "faq"
        collapsible = true
        default_index = 1
        "#,
    )?;
    let accordion = Accordion::new(config);
    let items: Vec<AccordionItem> = (0..QUESTIONS.len())
        .map(|i| accordion.add_item(ItemOptions::new().with_disabled(i == 2)))
        .collect();

    for (item, question) in items.iter().zip(QUESTIONS) {
        item.set_focus_target(move || println!("  focus -> {question}"))?;
    }

    print_state("initial", &items)?;
    items[3].button().click()?;
    print_state("after clicking the last question", &items)?;
    items[3].button().click()?;
    print_state("after collapsing it again", &items)?;

    println!("-- keyboard");
    items[1].button().key_down(NavKey::ArrowDown)?;
    items[3].button().key_down(NavKey::ArrowDown)?;
    items[3].button().key_down(NavKey::Home)?;

    // Controlled: the owner stores the selection and feeds it back.
    let owned: Arc<Mutex<Option<OpenPanels>>> = Arc::new(Mutex::new(None));
    let owned_clone = owned.clone();
    let controlled = Accordion::builder()
        .id("faq-controlled")
        .index(0)
        .on_change(move |change| *owned_clone.lock() = Some(change.open_panels.clone()))
        .build();
    let controlled_items: Vec<AccordionItem> = (0..QUESTIONS.len())
        .map(|_| controlled.add_item(ItemOptions::new()))
        .collect();

    controlled_items[2].button().click()?;
    print_state("controlled, before the owner applies", &controlled_items)?;
    let next = owned.lock().take();
    controlled.set_controlled_index(next);
    print_state("controlled, after the owner applies", &controlled_items)?;

    println!("\n{}", controlled.dump());
    Ok(())
}
