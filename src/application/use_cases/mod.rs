mod analyze_tree;

pub use analyze_tree::AnalyzeTreeUseCase;
