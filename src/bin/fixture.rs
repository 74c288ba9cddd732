//! Console demonstration: builds two brackets, records results and prints them.
//! Run with: cargo run --bin fixture
//! Pass `--json` to also dump the completed bracket as JSON. Log level via RUST_LOG.

use fixture_bracket::{
    create_match, inorder, postorder, preorder, print_fixture, Fixture, FixtureError,
};

fn print_numbered(title: &str, labels: &[String]) {
    println!("\n📋 {}:", title);
    for (i, label) in labels.iter().enumerate() {
        println!("   {}. {}", i + 1, label);
    }
}

/// 8 teams: quarter-finals feed two semi-finals, which feed the final.
fn world_cup_fixture() -> Fixture {
    let quarter_1 = create_match("Cuartos 1: Argentina vs Brasil");
    let quarter_2 = create_match("Cuartos 2: España vs Francia");
    let quarter_3 = create_match("Cuartos 3: Alemania vs Italia");
    let quarter_4 = create_match("Cuartos 4: Inglaterra vs Portugal");

    let mut semi_1 = create_match("Semifinal 1");
    let mut semi_2 = create_match("Semifinal 2");
    semi_1.set_children(Some(quarter_1), Some(quarter_2));
    semi_2.set_children(Some(quarter_3), Some(quarter_4));

    let mut final_match = create_match("FINAL DEL TORNEO");
    final_match.set_children(Some(semi_1), Some(semi_2));
    Fixture::new("Torneo de selecciones", Some(final_match))
}

fn run_main_demo(dump_json: bool) -> Result<(), FixtureError> {
    println!("{}", "=".repeat(60));
    println!("SISTEMA DE FIXTURES DEPORTIVOS CON ÁRBOLES BINARIOS");
    println!("{}", "=".repeat(60));

    let mut fixture = world_cup_fixture();
    log::info!("Built fixture {:?}", fixture.name);

    println!("\n🏆 FIXTURE INICIAL DEL TORNEO:");
    println!("{}", "-".repeat(40));
    print_fixture(fixture.root());

    let stats = fixture.stats();
    println!("\n📊 ESTADÍSTICAS:");
    println!("   • Altura del árbol: {}", stats.height);
    println!("   • Total de partidos: {}", stats.matches);

    println!("\n⚽ SIMULANDO RESULTADOS...");
    let results = [
        ("Cuartos 1", "Argentina"),
        ("Cuartos 2", "España"),
        ("Cuartos 3", "Alemania"),
        ("Cuartos 4", "Inglaterra"),
        ("Semifinal 1", "Argentina"),
        ("Semifinal 2", "Alemania"),
        ("FINAL", "Argentina"),
    ];
    for (query, winner) in results {
        fixture.advance_winner(query, winner)?;
    }

    println!("\n🏆 FIXTURE CON RESULTADOS:");
    println!("{}", "-".repeat(40));
    print_fixture(fixture.root());

    println!("\n🔄 RECORRIDOS DEL ÁRBOL:");
    println!("{}", "-".repeat(30));
    print_numbered("Preorden (Raíz → Izq → Der)", &preorder(fixture.root()));
    print_numbered("Inorden (Izq → Raíz → Der)", &inorder(fixture.root()));
    print_numbered("Postorden (Izq → Der → Raíz)", &postorder(fixture.root()));

    println!("\n🔍 BÚSQUEDA DE PARTIDOS:");
    println!("{}", "-".repeat(25));
    match fixture.find_match("Semifinal 1") {
        Some(found) => println!("✅ Encontrado: {}", found.label),
        None => println!("❌ Partido no encontrado"),
    }

    if dump_json {
        println!("\n🗂  FIXTURE EN JSON:");
        println!("{}", fixture.to_json()?);
    }
    Ok(())
}

/// Smaller bracket: two semi-finals and a final.
fn run_simple_demo() -> Result<(), FixtureError> {
    println!("\n{}", "=".repeat(50));
    println!("EJEMPLO: TORNEO SIMPLE DE 4 EQUIPOS");
    println!("{}", "=".repeat(50));

    let semi_a = create_match("Semifinal A: Real Madrid vs Barcelona");
    let semi_b = create_match("Semifinal B: Liverpool vs Manchester City");
    let mut final_match = create_match("FINAL");
    final_match.set_children(Some(semi_a), Some(semi_b));
    let mut fixture = Fixture::new("Torneo de clubes", Some(final_match));

    println!("\n🏆 FIXTURE INICIAL:");
    print_fixture(fixture.root());

    fixture.advance_winner("Semifinal A", "Real Madrid")?;
    fixture.advance_winner("Semifinal B", "Liverpool")?;
    fixture.advance_winner("FINAL", "Real Madrid")?;

    println!("\n🏆 RESULTADO FINAL:");
    print_fixture(fixture.root());
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let dump_json = std::env::args().skip(1).any(|arg| arg == "--json");
    log::info!("Starting fixture demo (json output: {})", dump_json);

    if let Err(e) = run_main_demo(dump_json).and_then(|()| run_simple_demo()) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
