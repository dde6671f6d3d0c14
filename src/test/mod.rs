mod nbp;
