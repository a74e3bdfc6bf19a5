mod phonefacade_tests;
