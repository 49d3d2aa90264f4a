mod property_derived;
