use animtext::{GroupDef, MemoryStage, StageEventKind, TextGroup};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let def = match std::env::args().nth(1) {
        Some(path) => GroupDef::from_path(path)?,
        None => GroupDef::from_json(include_str!("../tests/data/ticker.json"))?,
    };

    let mut stage = MemoryStage::new(def.elements.len());
    let mut group = TextGroup::from_def(&def, &mut stage);
    for p in &group.plan().plans {
        println!(
            "{} {:<14} offset {:>7} duration {:>7} finish {:>7}",
            p.id,
            p.animation,
            p.offset.to_string(),
            p.effective_duration.to_string(),
            p.finish_time().to_string()
        );
    }

    group.start(&mut stage);
    stage.run_until_idle(&mut group, 10_000);

    for e in stage.events() {
        match &e.kind {
            StageEventKind::TweenStarted {
                element,
                step,
                duration,
                easing,
            } => println!(
                "{:>8} {element} step {} for {duration} ({})",
                e.at.to_string(),
                step.map_or_else(|| "-".to_owned(), |s| s.to_string()),
                easing.as_str()
            ),
            StageEventKind::TweenFinished {
                element,
                cancelled: true,
                ..
            } => println!("{:>8} {element} interrupted", e.at.to_string()),
            _ => {}
        }
    }
    println!("status {:?} after {} plays", group.status(), group.plays());

    Ok(())
}
