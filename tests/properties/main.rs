mod grouping_tests;
mod ranking_tests;
