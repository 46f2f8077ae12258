//! Toolkit Walkthrough
//!
//! Runs every stage of the toolkit over a few short texts:
//! - stop-word filtering and stemming
//! - part-of-speech tagging and the tagset reference
//! - lemmatizing, with and without a word class
//! - noun-phrase chunking, chinking and named-entity chunking
//! - named-entity extraction in English and Spanish
//!
//! Run with: cargo run --example walkthrough
//! Set `RUST_LOG=debug` to see the extraction stages.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wordwise_core::{EntityChunker, PosTag, PosTagger, Tree};
use wordwise_toolkit::resources::WordClass;
use wordwise_toolkit::{extract_named_entities, LinguisticResources, RegexpParser, Toolkit};

const DUNE: &str = "Muad'Dib learned rapidly because his first training was in how to learn. \
And the first lesson of all was the basic trust that he could learn. It's shocking to find \
how many people do not believe they can learn, and how many more believe learning to be difficult.";

const LOTR: &str = "It's a dangerous business, Frodo, going out your door.";

const WAR_OF_THE_WORLDS: &str = "
    Men like Schiaparelli watched the red planet\u{2014}it is odd, by-the-bye, that
    for countless centuries Mars has been the star of war\u{2014}but failed to
    interpret the fluctuating appearances of the markings they mapped so well.
    All that time the Martians must have been getting ready.

    During the opposition of 1894 a great light was seen on the illuminated
    part of the disk, first at the Lick Observatory, then by Perrotin of Nice,
    and then by other observers. English readers heard of it first in the
    issue of Nature dated August 2.";

const BRUNO_MARS: &str = "Peter Gene Hernández (Honolulú, Hawái, 8 de octubre de 1985), \
conocido artísticamente como Bruno Mars, es un cantante, compositor, productor musical y \
bailarín estadounidense.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Wordwise Walkthrough ===\n");

    let resources = Arc::new(LinguisticResources::builtin()?);
    let toolkit = Toolkit::new(resources.clone())?;

    // Stop words
    let tokens = toolkit.tokenize(DUNE)?;
    let filtered = toolkit.stopwords().filter(&tokens);
    let words: Vec<&str> = filtered.iter().map(|t| t.text.as_str()).collect();
    println!("---- Tokens without stop words ----\n{:?}\n", words);

    // Stemming
    let stemmed = toolkit.stemmer()?.stem_all(&filtered);
    println!("---- Stemming ----\n{:?}\n", stemmed);

    // Tagging
    let tagged = toolkit.tagger().tag(&filtered)?;
    let pairs: Vec<String> = tagged.iter().map(ToString::to_string).collect();
    println!("---- Parts of speech ----\n{}\n", pairs.join(" "));
    println!("{}", PosTag::help("NN"));

    // Lemmatizing
    let lemmatizer = toolkit.lemmatizer();
    let lemmas = filtered
        .iter()
        .map(|t| lemmatizer.lemmatize(&t.text))
        .collect::<Result<Vec<_>, _>>()?;
    println!("---- Lemmatizing ----");
    println!("Tokens   {:?}", words);
    println!("Stems    {:?}", stemmed);
    println!("Lemmas   {:?}", lemmas);
    println!("'worst' as a noun:      {}", lemmatizer.lemmatize("worst")?);
    println!(
        "'worst' as an adjective: {}\n",
        lemmatizer.lemmatize_as("worst", WordClass::Adjective)?
    );

    // Chunking
    let np = RegexpParser::new("NP: {<DT>?<JJ>*<NN>}")?;
    let lotr_tags = toolkit.tag(LOTR)?;
    println!("---- Chunking ----");
    println!("{}", np.parse(&tagged));
    println!("{}\n", np.parse(&lotr_tags));

    // Chinking
    let chinker = RegexpParser::new(
        "
        Chunk: {<.*>+}
               }<JJ>{",
    )?;
    let chinked = chinker.parse(&lotr_tags);
    println!("---- Chunking & chinking ----\n{}", chinked);
    for chunk in chinked.subtrees_labelled("Chunk") {
        println!("  chunk: {}", chunk.surface());
    }
    println!();

    // Named-entity chunking
    let typed = toolkit.chunker().chunk(&lotr_tags, false)?;
    println!("---- Named entity recognition ----\n{}\n", typed);

    // Extraction
    let mut english: Vec<String> =
        extract_named_entities(&resources, WAR_OF_THE_WORLDS, "english")?
            .into_iter()
            .collect();
    english.sort();
    println!("---- Named entities (english) ----\n{:?}\n", english);

    let typed_spans = toolkit
        .chunker()
        .chunk(&toolkit.tag(WAR_OF_THE_WORLDS)?, false)?;
    for span in typed_spans.children() {
        if let Tree::Subtree { label, .. } = span {
            println!("  {:<12} {}", label, span.surface());
        }
    }
    println!();

    let mut spanish: Vec<String> = extract_named_entities(&resources, BRUNO_MARS, "spanish")?
        .into_iter()
        .collect();
    spanish.sort();
    println!("---- Named entities (spanish) ----\n{:?}", spanish);

    Ok(())
}
