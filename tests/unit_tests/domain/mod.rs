mod workload_stats_test;
mod wrapped_deck_test;
