use clap::{Parser, Subcommand};
use plansearch::{
    mdp::{Mdp, PlanningConfig, PlanningVariant, TabularMdp, ValueEstimationAgent},
    search::{
        search_engines::{AStar, SearchEngine, SearchEngineName, SearchResult},
        validate, ExplicitGraph, GraphHeuristicName, Verbosity,
    },
};
use std::{path::PathBuf, process::ExitCode};
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Search explicit graphs and plan in tabular MDPs.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a graph given as a TOML or JSON file for a plan from its start
    /// state to one of its goals.
    Search {
        #[arg(help = "The graph file")]
        graph: PathBuf,
        #[arg(
            value_enum,
            help = "The search engine to use, all of them if not given",
            short = 'e',
            long = "engine",
            id = "ENGINE"
        )]
        search_engine_name: Option<SearchEngineName>,
        #[arg(
            value_enum,
            help = "The heuristic to use with informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = GraphHeuristicName::Table
        )]
        heuristic_name: GraphHeuristicName,
        #[arg(
            help = "Warn about edges on which the heuristic is inconsistent, A* only",
            long = "check-consistency"
        )]
        check_consistency: bool,
        #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
        plan: Option<PathBuf>,
    },
    /// Run value iteration on an MDP given as a TOML or JSON file and print
    /// the resulting values and policy.
    Plan {
        #[arg(help = "The MDP file")]
        mdp: PathBuf,
        #[arg(
            help = "Planning configuration file, overridden by the flags below",
            long = "config",
            id = "CONFIG"
        )]
        config: Option<PathBuf>,
        #[arg(value_enum, help = "The value iteration variant", long = "variant", id = "VARIANT")]
        variant: Option<PlanningVariant>,
        #[arg(help = "The discount factor, in [0, 1)", long = "discount", id = "DISCOUNT")]
        discount: Option<f64>,
        #[arg(help = "The iteration budget", long = "iterations", id = "ITERATIONS")]
        iterations: Option<usize>,
        #[arg(
            help = "The residual threshold of prioritized sweeping",
            long = "theta",
            id = "THETA"
        )]
        theta: Option<f64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Search {
            graph,
            search_engine_name,
            heuristic_name,
            check_consistency,
            plan,
        } => search(
            graph,
            search_engine_name,
            heuristic_name,
            check_consistency,
            plan,
        ),
        Commands::Plan {
            mdp,
            config,
            variant,
            discount,
            iterations,
            theta,
        } => {
            let mut planning_config = match config {
                Some(path) => match PlanningConfig::from_path(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        error!("{}", e);
                        return ExitCode::FAILURE;
                    }
                },
                None => PlanningConfig::default(),
            };
            if let Some(variant) = variant {
                planning_config.variant = variant;
            }
            if let Some(discount) = discount {
                planning_config.discount = discount;
            }
            if let Some(iterations) = iterations {
                planning_config.iterations = iterations;
            }
            if let Some(theta) = theta {
                planning_config.theta = theta;
            }
            plan(mdp, planning_config)
        }
    }
}

fn search(
    graph_path: PathBuf,
    search_engine_name: Option<SearchEngineName>,
    heuristic_name: GraphHeuristicName,
    check_consistency: bool,
    plan_path: Option<PathBuf>,
) -> ExitCode {
    let graph = match ExplicitGraph::from_path(&graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let engines: Vec<SearchEngineName> = match search_engine_name {
        Some(name) => vec![name],
        None => SearchEngineName::iter().collect(),
    };

    let mut status = ExitCode::SUCCESS;
    for engine in engines {
        info!(engine = %engine, "running search");
        let mut heuristic = heuristic_name.create(&graph);
        let (result, statistics) = match engine {
            SearchEngineName::AStar if check_consistency => AStar::new()
                .with_consistency_check()
                .search(&graph, heuristic.as_mut()),
            _ => engine.search(&graph, heuristic.as_mut()),
        };

        match result {
            SearchResult::Success(plan) => {
                info!("validating plan");
                match validate(&plan, &graph) {
                    Ok(()) => info!("plan is valid"),
                    Err(e) => {
                        error!("plan is invalid: {}", e);
                        status = ExitCode::FAILURE;
                        continue;
                    }
                }
                info!(plan_length = plan.len(), plan_cost = plan.cost(&graph));

                println!("{}: plan found", engine);
                println!("{}", plan);
                println!(
                    "Plan length: {}, cost: {}, expanded: {}",
                    plan.len(),
                    plan.cost(&graph),
                    statistics.expanded_nodes()
                );

                if let Some(plan_path) = &plan_path {
                    if let Err(e) = std::fs::write(plan_path, plan.to_string()) {
                        error!("unable to write {}: {}", plan_path.display(), e);
                        status = ExitCode::FAILURE;
                    }
                }
            }
            SearchResult::ProvablyUnsolvable => {
                info!("no plan found");
                println!("{}: no plan found", engine);
            }
        }
    }
    status
}

fn plan(mdp_path: PathBuf, config: PlanningConfig) -> ExitCode {
    let mdp = match TabularMdp::from_path(&mdp_path) {
        Ok(mdp) => mdp,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        variant = %config.variant,
        discount = config.discount,
        iterations = config.iterations,
        theta = config.theta,
    );

    let agent = match config.build_agent(&mdp) {
        Ok(agent) => agent,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for state in mdp.states() {
        match agent.policy(&state) {
            Some(action) => println!("{}\t{:.6}\t{}", state, agent.value(&state), action),
            None => println!("{}\t{:.6}\t-", state, agent.value(&state)),
        }
    }
    ExitCode::SUCCESS
}
