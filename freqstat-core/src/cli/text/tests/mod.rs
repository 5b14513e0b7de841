mod aggregation_tests;
