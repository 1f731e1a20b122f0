mod reduce;
